use approx::{AbsDiffEq, RelativeEq};

use crate::Array;

/// **Requires crate feature `"approx"`**
impl<A, B> AbsDiffEq<Array<B>> for Array<A>
where
    A: AbsDiffEq<B>,
    A::Epsilon: Clone,
{
    type Epsilon = A::Epsilon;

    fn default_epsilon() -> A::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Array<B>, epsilon: A::Epsilon) -> bool {
        self.all_match(other, move |a, b| A::abs_diff_eq(a, b, epsilon.clone()))
    }
}

/// **Requires crate feature `"approx"`**
impl<A, B> RelativeEq<Array<B>> for Array<A>
where
    A: RelativeEq<B>,
    A::Epsilon: Clone,
{
    fn default_max_relative() -> A::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(&self, other: &Array<B>, epsilon: A::Epsilon, max_relative: A::Epsilon) -> bool {
        self.all_match(other, move |a, b| {
            A::relative_eq(a, b, epsilon.clone(), max_relative.clone())
        })
    }
}

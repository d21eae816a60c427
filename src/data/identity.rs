//! Identity - the effect that adds nothing.
//!
//! [`Identity<A>`] wraps exactly one value. Its dictionary
//! [`IdentityTypeLambda`] is the trivial applicative: `traverse` with it is
//! `map`, which is how the traversable identity law is stated.

use crate::hkt::{Kind, TypeLambda, Value};
use crate::typeclass::{
    Applicative, Covariant, FlatMap, Foldable, Invariant, Of, Product, SemiProduct, Traversable,
};

/// A wrapper holding exactly one value.
///
/// # Examples
///
/// ```rust
/// use kindling::data::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// IdentityTypeLambda
// =============================================================================

/// The type lambda of [`Identity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentityTypeLambda;

impl TypeLambda for IdentityTypeLambda {
    type Kind<A: Value> = Identity<A>;
}

impl Invariant for IdentityTypeLambda {
    fn imap<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        to: impl Fn(A) -> B + Clone + 'static,
        _from: impl Fn(B) -> A + Clone + 'static,
    ) -> Kind<Self, B> {
        Identity(to(fa.0))
    }
}

impl Covariant for IdentityTypeLambda {
    fn map<A: Value, B: Value>(&self, fa: Kind<Self, A>, mut function: impl FnMut(A) -> B) -> Kind<Self, B> {
        Identity(function(fa.0))
    }
}

impl Of for IdentityTypeLambda {
    fn of<A: Value>(&self, value: A) -> Kind<Self, A> {
        Identity(value)
    }
}

impl FlatMap for IdentityTypeLambda {
    fn flat_map<A: Value, B: Value>(
        &self,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<Self, B>,
    ) -> Kind<Self, B> {
        function(fa.0)
    }
}

impl SemiProduct for IdentityTypeLambda {
    fn product<A: Value, B: Value>(&self, fa: Kind<Self, A>, fb: Kind<Self, B>) -> Kind<Self, (A, B)> {
        Identity((fa.0, fb.0))
    }

    fn product_many<A: Value>(
        &self,
        fa: Kind<Self, A>,
        collection: impl IntoIterator<Item = Kind<Self, A>>,
    ) -> Kind<Self, Vec<A>> {
        Identity(std::iter::once(fa).chain(collection).map(Identity::into_inner).collect())
    }
}

impl Product for IdentityTypeLambda {}

impl Foldable for IdentityTypeLambda {
    fn reduce<A: Value, B>(&self, fa: Kind<Self, A>, initial: B, mut function: impl FnMut(B, A) -> B) -> B {
        function(initial, fa.0)
    }
}

impl Traversable for IdentityTypeLambda {
    fn traverse<H: Applicative, A: Value, B: Value>(
        &self,
        applicative: &H,
        fa: Kind<Self, A>,
        mut function: impl FnMut(A) -> Kind<H, B>,
    ) -> Kind<H, Kind<Self, B>> {
        applicative.map::<B, Identity<B>>(function(fa.0), Identity)
    }
}

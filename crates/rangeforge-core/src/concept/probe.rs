//! Per-requirement probes used by the diagnostic macros.
//!
//! A probe is a zero-sized value carrying the argument types of one call.
//! Each requirement gets a pair of traits with the same method: the "hit"
//! trait is implemented for `&Probe` only when the requirement's bounds
//! hold, the "miss" trait for `Probe` unconditionally. Calling the method on
//! `&&probe` picks the hit impl when it applies and falls back to the miss
//! impl otherwise, so each requirement yields a plain `bool` without
//! stopping at the first failure.
//!
//! The `assert_*` functions are the static-assertion counterparts: each one
//! is bounded by exactly one requirement, so every unmet requirement becomes
//! its own compile error.

use std::marker::PhantomData;

use crate::cursor::{
    Container, ForwardContainer, PermutableContainer, Readable, Sequence, Truncate,
    WritableContainer,
};
use crate::functional::{Predicate, Projection, Relation, UnaryFunction};

/// Argument types of a single-container call: container, callable and
/// projection.
pub struct Probe<S, F, P>(PhantomData<fn() -> (S, F, P)>);

impl<S, F, P> Probe<S, F, P> {
    #[inline]
    pub fn new(_: &S, _: &F, _: &P) -> Self {
        Probe(PhantomData)
    }
}

/// Argument types of a two-sequence call.
pub struct PairProbe<S1, S2, C, P1, P2>(PhantomData<fn() -> (S1, S2, C, P1, P2)>);

impl<S1, S2, C, P1, P2> PairProbe<S1, S2, C, P1, P2> {
    #[inline]
    pub fn new(_: &S1, _: &S2, _: &C, _: &P1, _: &P2) -> Self {
        PairProbe(PhantomData)
    }
}

macro_rules! requirement_probe {
    (
        $probe:ident<$($g:ident),*>,
        $hit:ident / $miss:ident :: $method:ident,
        where { $($bounds:tt)* }
    ) => {
        pub trait $hit {
            #[inline]
            fn $method(&self) -> bool {
                true
            }
        }

        impl<$($g),*> $hit for &$probe<$($g),*> where $($bounds)* {}

        pub trait $miss {
            #[inline]
            fn $method(&self) -> bool {
                false
            }
        }

        impl<$($g),*> $miss for $probe<$($g),*> {}
    };
}

requirement_probe!(
    Probe<S, F, P>,
    ForwardTraversableHit / ForwardTraversableMiss :: forward_traversable,
    where {
        S: ForwardContainer,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    TraversableHit / TraversableMiss :: traversable,
    where {
        S: Container,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    ProjectionHit / ProjectionMiss :: projection_accepts_element,
    where {
        S: Container,
        P: Projection<S::Element>,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    ComparatorHit / ComparatorMiss :: comparator_accepts_projected,
    where {
        S: Container,
        P: Projection<S::Element>,
        F: Relation<<P as Projection<S::Element>>::Output>,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    PredicateHit / PredicateMiss :: predicate_accepts_projected,
    where {
        S: Container,
        P: Projection<S::Element>,
        F: Predicate<<P as Projection<S::Element>>::Output>,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    FunctionHit / FunctionMiss :: function_accepts_projected,
    where {
        S: Container,
        P: Projection<S::Element>,
        F: UnaryFunction<<P as Projection<S::Element>>::Output>,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    WritableHit / WritableMiss :: result_writable,
    where {
        S: WritableContainer,
        P: Projection<S::Element>,
        F: UnaryFunction<<P as Projection<S::Element>>::Output>,
        <F as UnaryFunction<<P as Projection<S::Element>>::Output>>::Output: Into<S::Element>,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    PermutableHit / PermutableMiss :: permutable,
    where {
        S: PermutableContainer,
    }
);

requirement_probe!(
    Probe<S, F, P>,
    TruncatableHit / TruncatableMiss :: truncatable,
    where {
        S: Truncate,
    }
);

requirement_probe!(
    PairProbe<S1, S2, C, P1, P2>,
    PairTraversableHit / PairTraversableMiss :: sequences_traversable,
    where {
        S1: Sequence,
        S2: Sequence,
        S1::Cursor: Readable,
        S2::Cursor: Readable,
    }
);

requirement_probe!(
    PairProbe<S1, S2, C, P1, P2>,
    PairProjectionHit / PairProjectionMiss :: projections_accept_elements,
    where {
        S1: Sequence,
        S2: Sequence,
        S1::Cursor: Readable,
        S2::Cursor: Readable,
        P1: Projection<<S1::Cursor as Readable>::Item>,
        P2: Projection<<S2::Cursor as Readable>::Item>,
    }
);

requirement_probe!(
    PairProbe<S1, S2, C, P1, P2>,
    PairComparatorHit / PairComparatorMiss :: comparator_accepts_both,
    where {
        S1: Sequence,
        S2: Sequence,
        S1::Cursor: Readable,
        S2::Cursor: Readable,
        P1: Projection<<S1::Cursor as Readable>::Item>,
        P2: Projection<<S2::Cursor as Readable>::Item>,
        C: Relation<
            <P1 as Projection<<S1::Cursor as Readable>::Item>>::Output,
            <P2 as Projection<<S2::Cursor as Readable>::Item>>::Output,
        >,
    }
);

// ============================================================================
// Static assertions
// ============================================================================

#[inline]
pub fn assert_forward_traversable<S: ForwardContainer>(_: &S) {}

#[inline]
pub fn assert_traversable<S: Container>(_: &S) {}

#[inline]
pub fn assert_projection_accepts_element<S, P>(_: &S, _: &P)
where
    S: Container,
    P: Projection<S::Element>,
{
}

#[inline]
pub fn assert_comparator_accepts_projected<S, C, P>(_: &S, _: &C, _: &P)
where
    S: Container,
    P: Projection<S::Element>,
    C: Relation<P::Output>,
{
}

#[inline]
pub fn assert_predicate_accepts_projected<S, C, P>(_: &S, _: &C, _: &P)
where
    S: Container,
    P: Projection<S::Element>,
    C: Predicate<P::Output>,
{
}

#[inline]
pub fn assert_function_accepts_projected<S, F, P>(_: &S, _: &F, _: &P)
where
    S: Container,
    P: Projection<S::Element>,
    F: UnaryFunction<P::Output>,
{
}

#[inline]
pub fn assert_result_writable<S, F, P>(_: &S, _: &F, _: &P)
where
    S: WritableContainer,
    P: Projection<S::Element>,
    F: UnaryFunction<P::Output>,
    F::Output: Into<S::Element>,
{
}

#[inline]
pub fn assert_permutable<S: PermutableContainer>(_: &S) {}

#[inline]
pub fn assert_truncatable<S: Truncate>(_: &S) {}

#[inline]
pub fn assert_sequence_traversable<S>(_: &S)
where
    S: Sequence,
    S::Cursor: Readable,
{
}

#[inline]
pub fn assert_projection_accepts_item<S, P>(_: &S, _: &P)
where
    S: Sequence,
    S::Cursor: Readable,
    P: Projection<<S::Cursor as Readable>::Item>,
{
}

#[inline]
pub fn assert_comparator_accepts_both<S1, S2, C, P1, P2>(_: &S1, _: &S2, _: &C, _: &P1, _: &P2)
where
    S1: Sequence,
    S2: Sequence,
    S1::Cursor: Readable,
    S2::Cursor: Readable,
    P1: Projection<<S1::Cursor as Readable>::Item>,
    P2: Projection<<S2::Cursor as Readable>::Item>,
    C: Relation<P1::Output, P2::Output>,
{
}

// Crate-internal event macro; a no-op unless the `tracing` feature is on.
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!(target: "lazyseq", $($arg)+);
        }
    }};
}

// Gives a cursor type the pipe operator and a `for`-loop bridge.
//
// `pipeable!([C, P] Filter<C, P>)` expands to `impl<C, P, S> BitOr<S> for Filter<C, P>`
// plus `IntoIterator`, both guarded by `Self: Cursor`.
macro_rules! pipeable {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*, __Stage> ::core::ops::BitOr<__Stage> for $ty
        where
            Self: $crate::cursor::Cursor,
            __Stage: $crate::pipe::Stage<Self>,
        {
            type Output = <__Stage as $crate::pipe::Stage<Self>>::Output;

            #[inline]
            fn bitor(self, stage: __Stage) -> Self::Output {
                stage.apply(self)
            }
        }

        impl<$($gen)*> ::core::iter::IntoIterator for $ty
        where
            Self: $crate::cursor::Cursor,
        {
            type Item = <Self as $crate::cursor::Cursor>::Item;
            type IntoIter = $crate::pipe::Iter<Self>;

            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                $crate::pipe::Iter::new(self)
            }
        }
    };
}

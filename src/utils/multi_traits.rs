/// Generates enums with the single purpose of allowing a function to return one of several
/// iterator types while only promising `impl Iterator<Item = I>`, as the views do when a
/// hidden or virtual vertex needs a different edge source than a regular one.
macro_rules! impl_multi_iterators {
    ($(
        $name:ident -> $($T:ident:$G:ident),+;
    )*) => {
        $(
            pub enum $name<IterItem, $($G),+>
            where
                $(
                    $G: Iterator<Item = IterItem>,
                )+
            {
                $(
                    $T($G),
                )+
            }

            impl<IterItem, $($G),+> Iterator for $name<IterItem, $($G),+>
            where
                $(
                    $G: Iterator<Item = IterItem>,
                )+
            {
                type Item = IterItem;

                fn next(&mut self) -> Option<Self::Item> {
                    match self {
                        $(
                            $name::$T(iter) => iter.next(),
                        )+
                    }
                }

                fn size_hint(&self) -> (usize, Option<usize>) {
                    match self {
                        $(
                            $name::$T(iter) => iter.size_hint(),
                        )+
                    }
                }
            }
        )*
    };
}

impl_multi_iterators!(
    DoubleIter -> IterA:A, IterB:B;
);

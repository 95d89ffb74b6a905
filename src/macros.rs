/// Implements `Clone`, `Copy`, `PartialEq` and `Debug` for a value type whose
/// generic parameters only appear inside `PhantomData`.
///
/// `#[derive]` would require every marker type to implement those traits
/// too, which unit and coordinate markers never need to.
macro_rules! impl_value_traits {
    () => {};

    (
        $name:ident<$($param:ident),+> { $($field:ident),+ }
        $($remainder:tt)*
    ) => {
        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> PartialEq for $name<$($param),+> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }

        impl<$($param),+> std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }

        impl_value_traits! { $($remainder)* }
    };
}

pub(crate) use impl_value_traits;

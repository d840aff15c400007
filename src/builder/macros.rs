//! Macros for ergonomic state type declaration.

/// Declare an enum usable as a [`State`](crate::core::State).
///
/// Derives the traits the engine needs and implements `name()` from the
/// variant identifier. A variant may carry a display name with
/// `as "label"`; the label is also its serialized form, so configuration
/// files can use it as a key.
///
/// # Example
///
/// ```
/// use statute::core::State;
/// use statute::state_enum;
///
/// state_enum! {
///     pub enum Temperature {
///         TooHot as "too hot",
///         TooCold as "too cold",
///         JustRight as "just right",
///     }
/// }
///
/// assert_eq!(Temperature::JustRight.name(), "just right");
/// ```
#[macro_export]
macro_rules! state_enum {
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@name $variant $($label)?)),*
                }
            }
        }
    };
}

//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Defined enum is parsed case-insensitively from its `snake_case` name and
/// exposes all its variants via [`strum::VariantArray`]. The calling crate
/// must depend on [`strum`] itself, as its derives refer to `::strum` paths.
///
/// # Example
///
/// ```rust,ignore
/// use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!("Cube".parse::<Kind>(), Ok(Kind::Cube));
/// assert_eq!(Kind::Sphere.to_string(), "sphere");
/// ```
///
/// [`strum`]: https://docs.rs/strum
/// [`strum::VariantArray`]: https://docs.rs/strum/latest/strum/trait.VariantArray.html
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            $crate::private::strum::VariantArray,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[strum(serialize_all = "snake_case", ascii_case_insensitive)]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }
    };
}

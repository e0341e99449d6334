/// Automatically makes the boilerplate builder setters
/// The syntax is the type followed by a ',', then each of the fields of that type.
/// separate each of these lists by a ';'
/// ```ignore
/// impl RenderOptionsBuilder {
///     crate::builder_fields! {
///         u32, width height fpa;
/// //      ^^^  ~~~~~~~~~~~~~~~~
/// //      ^- type   ^- fields
///         &str, text font;
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder_fields {
    ($($t: ty, $($n: ident)+;)+) => ($($(
        pub fn $n(mut self, $n: $t) -> Self {
            self.$n = $n.into();
            self
        }
    )*)*)
}

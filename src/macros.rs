/// Implement [`Bind`](crate::Bind) and [`Field`](crate::Field) for one or more
/// structs by listing each bound field with its tag, in declaration order.
///
/// ```ignore
/// envtag::bind_struct! {
///     AppConfig {
///         host: "HOST",
///         port: "PORT,omitempty",
///         db: "DB_",
///     }
/// }
/// ```
///
/// A field listed with an empty tag (`""`) is skipped, unless it is itself a
/// bound struct, in which case its fields are read directly under the parent
/// prefix. Fields that are not listed are never touched.
#[macro_export]
macro_rules! bind_struct {
    ($($ty:ty { $($field:ident : $tag:expr),* $(,)? })+) => {
        $(
            impl $crate::Bind for $ty {
                #[allow(unused_variables)]
                fn bind_fields(
                    &mut self,
                    fields: &mut $crate::Fields<'_>,
                ) -> ::core::result::Result<(), $crate::EnvtagError> {
                    $(fields.field($tag, &mut self.$field)?;)*
                    ::core::result::Result::Ok(())
                }
            }

            impl $crate::Field for $ty {
                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Struct(self)
                }
            }
        )+
    };
}

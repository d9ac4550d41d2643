//! Composite properties: one optional value plus capability records.
//!
//! Concrete composites are declared with [`composite_property!`]. The
//! declaration fixes the value key and the capability order, which in turn
//! fixes the key order of the rendered object:
//!
//! 1. `delete`, when a capability reports the property deleted
//! 2. the value under its own key (e.g. `cartesian`)
//! 3. each capability's present fields, in declaration order
//!
//! When no capability contributes a field the composite renders as the bare
//! value (an array or a scalar), or `{}` if it holds no value either.

use super::capability::{CapabilityFields, Fields, DELETE_KEY};
use super::{JsonMap, JsonValue, ToJson};
use crate::util::{DeletePolicy, Error, Result, Settings};

/// Const check that no key appears twice across `sets`.
///
/// Used by [`composite_property!`] to reject colliding capabilities when the
/// type is compiled.
pub const fn keys_disjoint(sets: &[&[&str]]) -> bool {
    let mut a = 0;
    while a < sets.len() {
        let mut i = 0;
        while i < sets[a].len() {
            let mut b = a;
            while b < sets.len() {
                let mut j = if b == a { i + 1 } else { 0 };
                while j < sets[b].len() {
                    if str_eq(sets[a][i], sets[b][j]) {
                        return false;
                    }
                    j += 1;
                }
                b += 1;
            }
            i += 1;
        }
        a += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Runtime collision check over `(contributor, keys)` pairs.
///
/// Reports the first key owned twice, naming both owners.
pub fn check_composition(
    property: &'static str,
    contributors: &[(&'static str, &'static [&'static str])],
) -> Result<()> {
    let mut seen: Vec<(&'static str, &'static str)> = Vec::new();

    for &(owner, keys) in contributors {
        for &key in keys {
            if let Some(&(_, first)) = seen.iter().find(|(k, _)| *k == key) {
                tracing::error!(property, key, first, second = owner, "capability key collision");
                return Err(Error::Composition {
                    property,
                    key,
                    first,
                    second: owner,
                });
            }
            seen.push((key, owner));
        }
    }

    Ok(())
}

/// Render a composite from its parts.
///
/// `value` is the value key and value, if the composite holds one.
/// `capabilities` must be in declaration order.
pub fn render_composite(
    property: &'static str,
    value: Option<(&'static str, &dyn ToJson)>,
    capabilities: &[&dyn CapabilityFields],
    settings: &Settings,
) -> JsonValue {
    let mut fields = Fields::new();
    for capability in capabilities {
        capability.write_fields(&mut fields, settings);
    }
    let deleted = capabilities.iter().any(|c| c.deletes());

    tracing::trace!(
        property,
        has_value = value.is_some(),
        fields = fields.len(),
        deleted,
        "rendering composite"
    );

    if fields.is_empty() {
        return match value {
            Some((_, value)) => value.to_json_with(settings),
            None => JsonValue::Object(JsonMap::new()),
        };
    }

    let mut map = JsonMap::new();

    if deleted {
        map.insert(DELETE_KEY.to_owned(), JsonValue::Bool(true));
        if settings.delete_policy == DeletePolicy::DeleteOnly {
            return JsonValue::Object(map);
        }
    }

    if let Some((key, value)) = value {
        map.insert(key.to_owned(), value.to_json_with(settings));
    }

    for (key, field) in fields {
        if deleted && key == DELETE_KEY {
            continue;
        }
        map.insert(key.to_owned(), field);
    }

    JsonValue::Object(map)
}

/// Declare a composite property type and its keyword-style builder.
///
/// ```ignore
/// composite_property! {
///     /// A position that may be deleted and interpolated.
///     pub struct Position builder PositionBuilder {
///         value { cartesian("cartesian"): Cartesian3Value }
///         capabilities { deletable: Deletable, interpolatable: Interpolatable }
///     }
/// }
/// ```
///
/// The `value` section is optional. Capability keys and the value key must
/// be disjoint; a collision fails to compile, and `build()` re-checks it.
///
/// ```compile_fail
/// use czml::capability::{Deletable, Interpolatable};
/// use czml::values::StringLeaf;
///
/// czml::composite_property! {
///     pub struct Broken builder BrokenBuilder {
///         value { epoch("epoch"): StringLeaf }
///         capabilities { deletable: Deletable, interpolatable: Interpolatable }
///     }
/// }
/// ```
#[macro_export]
macro_rules! composite_property {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident builder $builder:ident {
            $( value { $value:ident ( $key:literal ) : $value_ty:ty } )?
            capabilities { $( $cap:ident : $cap_ty:ty ),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        $vis struct $name {
            $( $value: ::core::option::Option<$value_ty>, )?
            $( $cap: $cap_ty, )*
        }

        #[doc = concat!("Keyword-style builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default)]
        $vis struct $builder {
            $( $value: ::core::option::Option<$value_ty>, )?
            $( $cap: $cap_ty, )*
        }

        const _: () = ::core::assert!(
            $crate::core::keys_disjoint(&[
                $( &[$key] as &[&str], )?
                $( <$cap_ty as $crate::core::Capability>::KNOWN_PROPERTIES, )*
            ]),
            "composite capabilities collide on a JSON key"
        );

        impl $name {
            /// Start a keyword-style builder.
            pub fn builder() -> $builder {
                <$builder as ::core::default::Default>::default()
            }

            $(
                #[doc = concat!("The `", $key, "` value, if set.")]
                pub fn $value(&self) -> ::core::option::Option<&$value_ty> {
                    self.$value.as_ref()
                }
            )?

            $(
                #[doc = concat!("The [`", stringify!($cap_ty), "`] record.")]
                pub fn $cap(&self) -> &$cap_ty {
                    &self.$cap
                }
            )*
        }

        impl $builder {
            $(
                #[doc = concat!("Set the `", $key, "` value.")]
                pub fn $value(mut self, value: impl ::core::convert::Into<$value_ty>) -> Self {
                    self.$value = ::core::option::Option::Some(value.into());
                    self
                }
            )?

            $(
                /// Replace the whole capability record.
                pub fn $cap(mut self, $cap: $cap_ty) -> Self {
                    self.$cap = $cap;
                    self
                }
            )*

            /// Finish construction, rejecting colliding keys and invalid
            /// capability fields.
            pub fn build(self) -> $crate::Result<$name> {
                $crate::core::check_composition(
                    stringify!($name),
                    &[
                        $( (stringify!($value), &[$key] as &'static [&'static str]), )?
                        $( (
                            <$cap_ty as $crate::core::Capability>::NAME,
                            <$cap_ty as $crate::core::Capability>::KNOWN_PROPERTIES,
                        ), )*
                    ],
                )?;
                $( $crate::core::CapabilityFields::validate(&self.$cap)?; )*
                ::core::result::Result::Ok($name {
                    $( $value: self.$value, )?
                    $( $cap: self.$cap, )*
                })
            }
        }

        $(
            impl $crate::core::HasCapability<$cap_ty> for $name {
                fn capability(&self) -> &$cap_ty {
                    &self.$cap
                }
            }

            impl $crate::core::BuildsCapability<$cap_ty> for $builder {
                fn capability_mut(&mut self) -> &mut $cap_ty {
                    &mut self.$cap
                }
            }
        )*

        impl $crate::core::ToJson for $name {
            fn to_json_with(&self, settings: &$crate::Settings) -> $crate::core::JsonValue {
                let value: ::core::option::Option<(&'static str, &dyn $crate::core::ToJson)> =
                    ::core::option::Option::None
                    $( .or(self.$value.as_ref().map(|v| ($key, v as &dyn $crate::core::ToJson))) )?;
                $crate::core::render_composite(
                    stringify!($name),
                    value,
                    &[ $( &self.$cap as &dyn $crate::core::CapabilityFields, )* ],
                    settings,
                )
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &$crate::core::ToJson::to_json(self),
                    serializer,
                )
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let text = $crate::core::ToJson::dumps(self).map_err(|_| ::core::fmt::Error)?;
                f.write_str(&text)
            }
        }
    };
}

//! Accessor generators shared by the model types.
//!
//! Every optional property gets a getter, a setter taking `Option<T>` (where
//! `None` clears the value) and a consuming `with_*` builder.

/// Property whose getter hands out a reference.
macro_rules! property {
    ($field:ident, $set:ident, $with:ident: $ty:ty) => {
        property!(
            #[doc = concat!("The `", stringify!($field), "` property.")]
            $field, $set, $with: $ty
        );
    };
    ($(#[$meta:meta])+ $field:ident, $set:ident, $with:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }

        #[doc = concat!("Sets or clears `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Builder form of [`Self::", stringify!($set), "`].")]
        #[must_use]
        pub fn $with(mut self, value: impl Into<$ty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
}

/// String property, read back as `&str`.
macro_rules! text_property {
    ($field:ident, $set:ident, $with:ident) => {
        text_property!(
            #[doc = concat!("The `", stringify!($field), "` property.")]
            $field, $set, $with
        );
    };
    ($(#[$meta:meta])+ $field:ident, $set:ident, $with:ident) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets or clears `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: Option<String>) {
            self.$field = value;
        }

        #[doc = concat!("Builder form of [`Self::", stringify!($set), "`].")]
        #[must_use]
        pub fn $with(mut self, value: impl Into<String>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
}

/// `Copy` property (flags, counters, enums), read back by value.
macro_rules! flag_property {
    ($field:ident, $set:ident, $with:ident: $ty:ty) => {
        flag_property!(
            #[doc = concat!("The `", stringify!($field), "` property.")]
            $field, $set, $with: $ty
        );
    };
    ($(#[$meta:meta])+ $field:ident, $set:ident, $with:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<$ty> {
            self.$field
        }

        #[doc = concat!("Sets or clears `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value;
        }

        #[doc = concat!("Builder form of [`Self::", stringify!($set), "`].")]
        #[must_use]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Boxed recursive property (nested schemas).
macro_rules! boxed_property {
    ($field:ident, $set:ident, $with:ident: $ty:ty) => {
        boxed_property!(
            #[doc = concat!("The `", stringify!($field), "` property.")]
            $field, $set, $with: $ty
        );
    };
    ($(#[$meta:meta])+ $field:ident, $set:ident, $with:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_deref()
        }

        #[doc = concat!("Sets or clears `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: Option<$ty>) {
            self.$field = value.map(Box::new);
        }

        #[doc = concat!("Builder form of [`Self::", stringify!($set), "`].")]
        #[must_use]
        pub fn $with(mut self, value: $ty) -> Self {
            self.$field = Some(Box::new(value));
            self
        }
    };
}

/// List property with element level `add_*` / `remove_*`.
macro_rules! list_property {
    ($field:ident, $set:ident, $with:ident, $add:ident, $remove:ident: $ty:ty) => {
        list_property!(
            #[doc = concat!("The `", stringify!($field), "` property.")]
            $field, $set, $with, $add, $remove: $ty
        );
    };
    ($(#[$meta:meta])+ $field:ident, $set:ident, $with:ident, $add:ident, $remove:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }

        #[doc = concat!("Replaces or clears `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: Option<Vec<$ty>>) {
            self.$field = value;
        }

        #[doc = concat!("Builder form of [`Self::", stringify!($set), "`].")]
        #[must_use]
        pub fn $with(mut self, value: Vec<$ty>) -> Self {
            self.$field = Some(value);
            self
        }

        #[doc = concat!("Appends one element to `", stringify!($field), "`, creating the list if unset.")]
        pub fn $add(&mut self, item: impl Into<$ty>) -> &mut Self {
            self.$field.get_or_insert_with(Vec::new).push(item.into());
            self
        }

        #[doc = concat!("Removes every element of `", stringify!($field), "` equal to `item`.")]
        pub fn $remove(&mut self, item: &$ty) -> bool {
            match self.$field.as_mut() {
                Some(list) => {
                    let before = list.len();
                    list.retain(|existing| existing != item);
                    list.len() != before
                }
                None => false,
            }
        }
    };
}

/// Name-keyed map property with entry level `add_*` / `remove_*`.
macro_rules! map_property {
    ($field:ident, $set:ident, $with:ident, $add:ident, $remove:ident: $ty:ty) => {
        map_property!(
            #[doc = concat!("The `", stringify!($field), "` property.")]
            $field, $set, $with, $add, $remove: $ty
        );
    };
    ($(#[$meta:meta])+ $field:ident, $set:ident, $with:ident, $add:ident, $remove:ident: $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> Option<&indexmap::IndexMap<String, $ty>> {
            self.$field.as_ref()
        }

        #[doc = concat!("Replaces or clears `", stringify!($field), "`.")]
        pub fn $set(&mut self, value: Option<indexmap::IndexMap<String, $ty>>) {
            self.$field = value;
        }

        #[doc = concat!("Builder form of [`Self::", stringify!($set), "`].")]
        #[must_use]
        pub fn $with(mut self, value: indexmap::IndexMap<String, $ty>) -> Self {
            self.$field = Some(value);
            self
        }

        #[doc = concat!("Inserts one entry into `", stringify!($field), "`, creating the map if unset.")]
        pub fn $add(&mut self, key: impl Into<String>, value: impl Into<$ty>) -> &mut Self {
            self.$field
                .get_or_insert_with(indexmap::IndexMap::new)
                .insert(key.into(), value.into());
            self
        }

        #[doc = concat!("Removes one entry from `", stringify!($field), "`.")]
        pub fn $remove(&mut self, key: &str) -> Option<$ty> {
            self.$field.as_mut().and_then(|map| map.shift_remove(key))
        }
    };
}

/// Accessors for the map-like models (`Paths`, `Callback`, `Responses`, ...).
/// Expects the entries to live in a field called `entries`.
macro_rules! entry_accessors {
    ($ty:ty; $all:ident, $set_all:ident, $get:ident, $has:ident, $add:ident, $remove:ident, $with:ident) => {
        /// All entries, in insertion order.
        pub fn $all(&self) -> &indexmap::IndexMap<String, $ty> {
            &self.entries
        }

        /// Replaces every entry.
        pub fn $set_all(&mut self, entries: indexmap::IndexMap<String, $ty>) {
            self.entries = entries;
        }

        /// Looks up a single entry.
        pub fn $get(&self, key: &str) -> Option<&$ty> {
            self.entries.get(key)
        }

        /// Whether an entry exists for `key`.
        pub fn $has(&self, key: &str) -> bool {
            self.entries.contains_key(key)
        }

        /// Inserts or replaces an entry.
        pub fn $add(&mut self, key: impl Into<String>, value: $ty) -> &mut Self {
            self.entries.insert(key.into(), value);
            self
        }

        /// Removes an entry, preserving the order of the rest.
        pub fn $remove(&mut self, key: &str) -> Option<$ty> {
            self.entries.shift_remove(key)
        }

        /// Builder form of the insert operation.
        #[must_use]
        pub fn $with(mut self, key: impl Into<String>, value: $ty) -> Self {
            self.entries.insert(key.into(), value);
            self
        }

        /// Number of entries.
        pub fn len(&self) -> usize {
            self.entries.len()
        }

        /// Whether there are no entries.
        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    };
}

/// Wires a model type to [`crate::models::Extensible`] through its `extensions` field.
macro_rules! impl_extensible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::models::Extensible for $ty {
                fn extensions(&self) -> &$crate::models::Extensions {
                    &self.extensions
                }

                fn extensions_mut(&mut self) -> &mut $crate::models::Extensions {
                    &mut self.extensions
                }
            }
        )*
    };
}

/// Wires a model type to [`crate::models::Reference`] through its `reference` field.
macro_rules! impl_reference {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl $crate::models::Reference for $ty {
                const KIND: $crate::models::ComponentKind = $crate::models::ComponentKind::$kind;

                fn reference(&self) -> Option<&str> {
                    self.reference.as_deref()
                }

                fn reference_mut(&mut self) -> &mut Option<String> {
                    &mut self.reference
                }
            }
        )*
    };
}

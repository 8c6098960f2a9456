#![deny(missing_docs)]

//! # Model Factory
//!
//! The sanctioned way to obtain model instances, either statically by type
//! ([`OasFactory::create`]) or dynamically by kind name
//! ([`OasFactory::create_object`]).

use crate::error::{OasError, OasResult};
use crate::models::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Marker for model types the factory can instantiate.
pub trait Constructible: Default {
    /// The kind tag for this type.
    const KIND: ModelKind;

    /// A fresh, empty instance.
    fn create() -> Self {
        Self::default()
    }
}

/// Names that describe shared contracts rather than concrete models.
const ABSTRACT_CONTRACTS: [&str; 3] = ["Constructible", "Extensible", "Reference"];

macro_rules! constructible_models {
    ($($variant:ident),* $(,)?) => {
        /// Every constructible model kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ModelKind {
            $(
                #[doc = concat!("[`", stringify!($variant), "`]")]
                $variant,
            )*
        }

        impl ModelKind {
            /// All kinds, in declaration order.
            pub const ALL: &'static [ModelKind] = &[$(ModelKind::$variant),*];

            /// The type name of the kind.
            pub fn name(self) -> &'static str {
                match self {
                    $(ModelKind::$variant => stringify!($variant),)*
                }
            }

            fn instantiate(self) -> ModelObject {
                match self {
                    $(ModelKind::$variant => ModelObject::$variant(<$variant>::create()),)*
                }
            }
        }

        /// A model instance whose type is only known at runtime.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum ModelObject {
            $(
                #[doc = concat!("A [`", stringify!($variant), "`] instance.")]
                $variant($variant),
            )*
        }

        impl ModelObject {
            /// The kind of the wrapped instance.
            pub fn kind(&self) -> ModelKind {
                match self {
                    $(ModelObject::$variant(_) => ModelKind::$variant,)*
                }
            }
        }

        $(
            impl Constructible for $variant {
                const KIND: ModelKind = ModelKind::$variant;
            }

            impl From<$variant> for ModelObject {
                fn from(value: $variant) -> Self {
                    ModelObject::$variant(value)
                }
            }
        )*
    };
}

constructible_models!(
    OpenApi,
    Info,
    Contact,
    License,
    ExternalDocumentation,
    Server,
    ServerVariable,
    Tag,
    Paths,
    PathItem,
    Operation,
    Parameter,
    RequestBody,
    Content,
    MediaType,
    Encoding,
    Responses,
    ApiResponse,
    Header,
    Example,
    Link,
    Callback,
    Components,
    Schema,
    Discriminator,
    Xml,
    SecurityScheme,
    OAuthFlows,
    OAuthFlow,
    SecurityRequirement,
);

impl ModelKind {
    /// Parses a kind from its type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = OasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OasFactory::kind_for(s)
    }
}

/// Creates model instances.
pub struct OasFactory;

impl OasFactory {
    /// A new, empty instance of `T`; distinct on every call.
    pub fn create<T: Constructible>() -> T {
        T::create()
    }

    /// A new, empty instance of the kind named `name`.
    ///
    /// # Errors
    ///
    /// * [`OasError::MissingArgument`] when `name` is empty.
    /// * [`OasError::NotConstructible`] for the shared contracts
    ///   (`Constructible`, `Extensible`, `Reference`) and any unknown name.
    pub fn create_object(name: &str) -> OasResult<ModelObject> {
        let kind = Self::kind_for(name)?;
        tracing::trace!(kind = %kind, "creating model object");
        Ok(kind.instantiate())
    }

    /// A new, empty instance of `kind`.
    pub fn create_kind(kind: ModelKind) -> ModelObject {
        kind.instantiate()
    }

    fn kind_for(name: &str) -> OasResult<ModelKind> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OasError::MissingArgument("model type name".into()));
        }
        if ABSTRACT_CONTRACTS.contains(&name) {
            return Err(OasError::NotConstructible(name.to_string()));
        }
        ModelKind::from_name(name).ok_or_else(|| OasError::NotConstructible(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_instantiates_itself() {
        for kind in ModelKind::ALL {
            let object = OasFactory::create_object(kind.name()).unwrap();
            assert_eq!(object.kind(), *kind);
        }
    }

    #[test]
    fn test_created_instances_are_distinct() {
        let mut first: Schema = OasFactory::create();
        let second: Schema = OasFactory::create();
        first.set_title(Some("changed".into()));
        assert_eq!(second.title(), None);
        assert_ne!(first, second);
    }

    #[test]
    fn test_contracts_are_not_constructible() {
        for name in ABSTRACT_CONTRACTS {
            let err = OasFactory::create_object(name).unwrap_err();
            assert!(matches!(err, OasError::NotConstructible(n) if n == name));
        }
    }

    #[test]
    fn test_unknown_and_empty_names() {
        assert!(matches!(
            OasFactory::create_object("MyCustomSchema"),
            Err(OasError::NotConstructible(_))
        ));
        assert!(matches!(
            OasFactory::create_object("String"),
            Err(OasError::NotConstructible(_))
        ));
        assert!(matches!(
            OasFactory::create_object(""),
            Err(OasError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_kind_constant_matches_type() {
        assert_eq!(<OpenApi as Constructible>::KIND, ModelKind::OpenApi);
        assert_eq!(<SecurityRequirement as Constructible>::KIND.name(), "SecurityRequirement");
        assert_eq!("Callback".parse::<ModelKind>().unwrap(), ModelKind::Callback);
    }

    #[test]
    fn test_model_object_serializes_inner_value() {
        let object: ModelObject = Info::default().with_title("t").into();
        assert_eq!(serde_json::to_string(&object).unwrap(), r#"{"title":"t"}"#);
    }
}

//! Recursive YCQL type descriptors
//!
//! A [`QlType`] is either a primitive kind or a composite kind carrying its
//! parameter types. Descriptors are immutable and their parameters are shared
//! through `Arc`, so cloning a descriptor out of a cached schema is cheap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use winnow::ascii::multispace0;
use winnow::combinator::{cut_err, delimited, eof, opt, preceded, separated, terminated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{DataType, InternalType};

/// A declared YCQL type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QlType {
    /// Scalar type such as `int` or `text`
    Primitive(DataType),
    /// `map<K, V>`
    Map(Arc<QlType>, Arc<QlType>),
    /// `set<E>`
    Set(Arc<QlType>),
    /// `list<E>`
    List(Arc<QlType>),
    /// `tuple<T1, T2, ...>`
    Tuple(Vec<Arc<QlType>>),
}

impl QlType {
    /// Create a primitive type.
    ///
    /// Composite kinds must be built with their own constructors; passing one
    /// here is a programming error.
    pub fn primitive(data_type: DataType) -> Self {
        debug_assert!(
            data_type.is_primitive(),
            "{data_type} is not a primitive kind"
        );
        Self::Primitive(data_type)
    }

    pub fn map(key: QlType, value: QlType) -> Self {
        Self::Map(Arc::new(key), Arc::new(value))
    }

    pub fn set(elem: QlType) -> Self {
        Self::Set(Arc::new(elem))
    }

    pub fn list(elem: QlType) -> Self {
        Self::List(Arc::new(elem))
    }

    pub fn tuple(elems: Vec<QlType>) -> Self {
        Self::Tuple(elems.into_iter().map(Arc::new).collect())
    }

    /// The top-level kind
    pub fn main(&self) -> DataType {
        match self {
            Self::Primitive(dt) => *dt,
            Self::Map(..) => DataType::Map,
            Self::Set(_) => DataType::Set,
            Self::List(_) => DataType::List,
            Self::Tuple(_) => DataType::Tuple,
        }
    }

    /// Parameter types in declaration order (empty for primitives)
    pub fn params(&self) -> Vec<&Arc<QlType>> {
        match self {
            Self::Primitive(_) => Vec::new(),
            Self::Map(k, v) => vec![k, v],
            Self::Set(e) | Self::List(e) => vec![e],
            Self::Tuple(elems) => elems.iter().collect(),
        }
    }

    pub fn param_type(&self, index: usize) -> Option<&Arc<QlType>> {
        self.params().get(index).copied()
    }

    pub fn is_collection(&self) -> bool {
        self.main().is_collection()
    }

    pub fn internal_type(&self) -> InternalType {
        self.main().internal_type()
    }
}

impl From<DataType> for QlType {
    fn from(data_type: DataType) -> Self {
        Self::primitive(data_type)
    }
}

impl From<&QlType> for InternalType {
    fn from(ty: &QlType) -> Self {
        ty.internal_type()
    }
}

impl fmt::Display for QlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(dt) => write!(f, "{}", dt),
            _ => {
                write!(f, "{}<", self.main())?;
                for (i, param) in self.params().into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                f.write_str(">")
            }
        }
    }
}

/// Failure to read a type written in CQL syntax
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("unexpected end of type '{0}'")]
    UnexpectedEnd(String),

    #[error("invalid type syntax at offset {offset} in '{input}': {message}")]
    Syntax {
        offset: usize,
        input: String,
        message: String,
    },

    #[error("{name} takes {expected} type parameter(s), got {found}")]
    WrongParamCount {
        name: String,
        expected: usize,
        found: usize,
    },
}

impl FromStr for QlType {
    type Err = TypeParseError;

    /// Parse `map<text, frozen<list<int>>>` style type names.
    ///
    /// `frozen<T>` is accepted and reads as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = terminated(type_syntax, eof).parse(s).map_err(|err| {
            if err.offset() >= s.len() {
                TypeParseError::UnexpectedEnd(s.to_string())
            } else {
                TypeParseError::Syntax {
                    offset: err.offset(),
                    input: s.to_string(),
                    message: err.inner().to_string(),
                }
            }
        })?;
        syntax.resolve()
    }
}

impl TryFrom<String> for QlType {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QlType> for String {
    fn from(ty: QlType) -> Self {
        ty.to_string()
    }
}

type Input<'s> = &'s str;

/// A type name with its bracketed parameters, before kinds are checked
#[derive(Debug)]
struct TypeSyntax<'s> {
    name: &'s str,
    params: Option<Vec<TypeSyntax<'s>>>,
}

fn ws<'s>(input: &mut Input<'s>) -> ModalResult<&'s str> {
    multispace0.parse_next(input)
}

fn type_name<'s>(input: &mut Input<'s>) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .context(StrContext::Label("type name"))
        .parse_next(input)
}

fn type_syntax<'s>(input: &mut Input<'s>) -> ModalResult<TypeSyntax<'s>> {
    let name = delimited(ws, type_name, ws).parse_next(input)?;
    let params = opt(preceded(
        '<',
        cut_err(terminated(separated(1.., type_syntax, ','), '>'))
            .context(StrContext::Expected(StrContextValue::CharLiteral('>'))),
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    Ok(TypeSyntax { name, params })
}

impl TypeSyntax<'_> {
    fn resolve(self) -> Result<QlType, TypeParseError> {
        let name = self.name.to_ascii_lowercase();
        let params = self
            .params
            .unwrap_or_default()
            .into_iter()
            .map(TypeSyntax::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        let arity_error = |expected: usize, found: usize| TypeParseError::WrongParamCount {
            name: name.clone(),
            expected,
            found,
        };

        if name == "frozen" {
            let found = params.len();
            let mut iter = params.into_iter();
            return match (iter.next(), found) {
                (Some(inner), 1) => Ok(inner),
                _ => Err(arity_error(1, found)),
            };
        }

        let data_type =
            DataType::from_name(&name).ok_or_else(|| TypeParseError::UnknownType(name.clone()))?;
        if data_type.is_primitive() {
            return if params.is_empty() {
                Ok(QlType::primitive(data_type))
            } else {
                Err(arity_error(0, params.len()))
            };
        }

        let mut iter = params.into_iter();
        match (data_type, iter.len()) {
            (DataType::Map, 2) => {
                let (Some(k), Some(v)) = (iter.next(), iter.next()) else {
                    return Err(arity_error(2, 0));
                };
                Ok(QlType::map(k, v))
            }
            (DataType::Set, 1) => iter.next().map(QlType::set).ok_or(arity_error(1, 0)),
            (DataType::List, 1) => iter.next().map(QlType::list).ok_or(arity_error(1, 0)),
            (DataType::Tuple, n) if n > 0 => Ok(QlType::tuple(iter.collect())),
            (DataType::Map, n) => Err(arity_error(2, n)),
            (_, n) => Err(arity_error(1, n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_and_params() {
        let ty = QlType::map(DataType::String.into(), QlType::list(DataType::Int32.into()));
        assert_eq!(ty.main(), DataType::Map);
        assert_eq!(ty.params().len(), 2);
        assert_eq!(
            ty.param_type(1).map(|p| p.main()),
            Some(DataType::List)
        );
        assert!(ty.param_type(2).is_none());
        assert!(QlType::from(DataType::Bool).params().is_empty());
    }

    #[test]
    fn test_display() {
        let ty = QlType::map(DataType::String.into(), QlType::set(DataType::Uuid.into()));
        assert_eq!(ty.to_string(), "map<text, set<uuid>>");
    }

    #[test]
    fn test_parse() {
        let ty: QlType = "MAP<varchar, frozen<list<bigint>>>".parse().unwrap();
        assert_eq!(
            ty,
            QlType::map(DataType::String.into(), QlType::list(DataType::Int64.into()))
        );
        assert_eq!(ty.to_string(), "map<text, list<bigint>>");

        let tuple: QlType = "tuple<int, text>".parse().unwrap();
        assert_eq!(tuple.main(), DataType::Tuple);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "jsonb".parse::<QlType>(),
            Err(TypeParseError::UnknownType("jsonb".to_string()))
        );
        assert!(matches!(
            "map<int>".parse::<QlType>(),
            Err(TypeParseError::WrongParamCount { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            "list<int".parse::<QlType>(),
            Err(TypeParseError::UnexpectedEnd(_))
        ));
        assert!(matches!(
            "int>".parse::<QlType>(),
            Err(TypeParseError::Syntax { offset: 3, .. })
        ));
        assert!(matches!(
            "list<>".parse::<QlType>(),
            Err(TypeParseError::Syntax { offset: 5, .. })
        ));
        assert!(matches!(
            "int<text>".parse::<QlType>(),
            Err(TypeParseError::WrongParamCount { expected: 0, found: 1, .. })
        ));
        assert!(matches!(
            "frozen<int, text>".parse::<QlType>(),
            Err(TypeParseError::WrongParamCount { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_parse_whitespace() {
        let ty: QlType = " map < text ,frozen< set<int> > > ".parse().unwrap();
        assert_eq!(
            ty,
            QlType::map(DataType::String.into(), QlType::set(DataType::Int32.into()))
        );
    }

    #[test]
    fn test_serde_as_string() {
        let ty: QlType = serde_json::from_str("\"set<timeuuid>\"").unwrap();
        assert_eq!(ty, QlType::set(DataType::Timeuuid.into()));
        assert_eq!(serde_json::to_string(&ty).unwrap(), "\"set<timeuuid>\"");
    }
}

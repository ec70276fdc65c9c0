use quote::ToTokens;
use syn::{PathArguments, Type};

/// Declared type as source text without whitespace (`Option<String>`).
pub fn type_text(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// `bool`, `std::primitive::bool` or `core::primitive::bool`.
///
/// Aliases cannot be seen here; the runtime still classifies the field by
/// `TypeId`, so an aliased bool would need its getter named by hand.
pub fn is_bool(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() {
        return false;
    }

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "bool" && segment.arguments == PathArguments::None)
}

use crate::util::{is_bool, type_text};
use darling::{FromDeriveInput, FromField, ast::Data};
use fieldcopy_utils::naming;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Error, Generics, Ident, Type, ext::IdentExt};

///
/// BeanInput
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(bean), supports(struct_named))]
struct BeanInput {
    ident: Ident,
    generics: Generics,
    data: Data<(), BeanField>,

    #[darling(default)]
    accessors: bool,

    #[darling(default)]
    getters: bool,

    #[darling(default)]
    setters: bool,

    #[darling(default)]
    proxy: bool,
}

///
/// BeanField
///

#[derive(Debug, FromField)]
#[darling(attributes(bean))]
struct BeanField {
    ident: Option<Ident>,
    ty: Type,

    #[darling(default)]
    parent: bool,

    #[darling(default)]
    readonly: bool,

    #[darling(default)]
    skip: bool,
}

///
/// Field
/// a registered field, with everything codegen needs precomputed
///

struct Field {
    ident: Ident,
    name: String,
    ty: Type,
    ty_text: String,
    readonly: bool,
    getter: String,
    getter_method: Ident,
    setter: String,
    setter_method: Ident,
}

impl Field {
    fn new(ident: Ident, ty: Type, readonly: bool) -> Self {
        let name = ident.unraw().to_string();
        let is_bool = is_bool(&ty);

        Self {
            getter: naming::getter_name(&name, is_bool),
            getter_method: format_ident!("{}", naming::getter_method(&name, is_bool)),
            setter: naming::setter_name(&name),
            setter_method: format_ident!("{}", naming::setter_method(&name)),
            ty_text: type_text(&ty),
            ident,
            name,
            ty,
            readonly,
        }
    }
}

///
/// Bean
/// validated derive input
///

struct Bean {
    ident: Ident,
    fields: Vec<Field>,
    parent: Option<(Ident, Type)>,
    getters: bool,
    setters: bool,
    proxy: bool,
}

impl Bean {
    fn from_input(input: BeanInput) -> Result<Self, Error> {
        if !input.generics.params.is_empty() {
            return Err(Error::new_spanned(
                &input.generics,
                "Bean cannot be derived for generic structs",
            ));
        }

        let Data::Struct(data) = input.data else {
            return Err(Error::new_spanned(
                &input.ident,
                "Bean can only be derived for structs with named fields",
            ));
        };

        let mut fields = Vec::new();
        let mut parent = None;

        for field in data.fields {
            let Some(ident) = field.ident else {
                return Err(Error::new_spanned(
                    &field.ty,
                    "Bean can only be derived for structs with named fields",
                ));
            };

            if field.parent {
                if field.skip || field.readonly {
                    return Err(Error::new_spanned(
                        &ident,
                        "a parent field cannot also be `skip` or `readonly`",
                    ));
                }
                if parent.is_some() {
                    return Err(Error::new_spanned(
                        &ident,
                        "a bean can declare at most one parent field",
                    ));
                }
                parent = Some((ident, field.ty));
                continue;
            }

            if field.skip {
                continue;
            }
            if ident.unraw().to_string().chars().any(char::is_uppercase) {
                return Err(Error::new_spanned(
                    &ident,
                    "bean field names must be snake_case",
                ));
            }

            fields.push(Field::new(ident, field.ty, field.readonly));
        }

        if input.proxy && parent.is_none() {
            return Err(Error::new_spanned(
                &input.ident,
                "a proxy bean must declare the type it wraps with #[bean(parent)]",
            ));
        }

        Ok(Self {
            ident: input.ident,
            fields,
            parent,
            getters: input.getters || input.accessors,
            setters: input.setters || input.accessors,
            proxy: input.proxy,
        })
    }

    // accessors are only generated for fields a copy can write
    fn accessor_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.readonly)
    }

    fn schema_impl(&self) -> TokenStream {
        let ident = &self.ident;
        let name = ident.to_string();
        let path = quote!(concat!(module_path!(), "::", #name));

        let descriptors = self.fields.iter().map(|field| {
            let Field {
                name,
                ty,
                ty_text,
                readonly,
                ..
            } = field;

            quote! {
                ::fieldcopy::model::FieldDescriptor {
                    name: #name,
                    ty: #ty_text,
                    type_id: ::fieldcopy::model::type_id_of::<#ty>,
                    declaring_type: #path,
                    readonly: #readonly,
                }
            }
        });

        let getters: Vec<_> = if self.getters {
            self.accessor_fields().map(|f| f.getter.as_str()).collect()
        } else {
            Vec::new()
        };
        let setters: Vec<_> = if self.setters {
            self.accessor_fields().map(|f| f.setter.as_str()).collect()
        } else {
            Vec::new()
        };

        let parent = match &self.parent {
            Some((_, ty)) => quote!(Some(<#ty as ::fieldcopy::traits::BeanSchema>::BEAN_TYPE)),
            None => quote!(None),
        };
        let proxy = self.proxy;

        quote! {
            impl ::fieldcopy::traits::BeanSchema for #ident {
                const BEAN_TYPE: &'static ::fieldcopy::model::BeanType =
                    &::fieldcopy::model::BeanType {
                        name: #name,
                        path: #path,
                        fields: &[#(#descriptors),*],
                        getters: &[#(#getters),*],
                        setters: &[#(#setters),*],
                        parent: #parent,
                        proxy: #proxy,
                    };
            }
        }
    }

    fn bean_impl(&self) -> TokenStream {
        let ident = &self.ident;
        let name = ident.to_string();

        let parent_methods = self.parent.as_ref().map(|(field, _)| {
            quote! {
                fn parent(&self) -> Option<&dyn ::fieldcopy::traits::Bean> {
                    Some(&self.#field)
                }

                fn parent_mut(&mut self) -> Option<&mut dyn ::fieldcopy::traits::Bean> {
                    Some(&mut self.#field)
                }
            }
        });

        let read_arms = self.fields.iter().map(|field| {
            let Field {
                ident: field_ident,
                name: field_name,
                ..
            } = field;

            quote! {
                #field_name => Ok(ToValue::to_value(&self.#field_ident)),
            }
        });

        let write_arms = self.fields.iter().map(|field| {
            let Field {
                ident: field_ident,
                name: field_name,
                ty_text,
                readonly,
                ..
            } = field;

            if *readonly {
                quote! {
                    #field_name => Err(AccessError::read_only(#name, field)),
                }
            } else {
                quote! {
                    #field_name => {
                        self.#field_ident = FromValue::from_value(&value).ok_or_else(|| {
                            AccessError::type_mismatch(#name, field, #ty_text, &value)
                        })?;

                        Ok(())
                    }
                }
            }
        });

        let getter_fn = self.getters.then(|| {
            let arms = self.accessor_fields().map(|field| {
                let Field {
                    getter,
                    getter_method,
                    ..
                } = field;

                quote! {
                    #getter => Ok(ToValue::to_value(&self.#getter_method())),
                }
            });

            quote! {
                fn invoke_getter(
                    &self,
                    accessor: &str,
                ) -> Result<::fieldcopy::value::Value, ::fieldcopy::error::AccessError> {
                    #[allow(unused_imports)]
                    use ::fieldcopy::{error::AccessError, traits::ToValue};

                    match accessor {
                        #(#arms)*
                        _ => Err(AccessError::no_such_accessor(#name, accessor)),
                    }
                }
            }
        });

        let setter_fn = self.setters.then(|| {
            let arms = self.accessor_fields().map(|field| {
                let Field {
                    setter,
                    setter_method,
                    ty_text,
                    ..
                } = field;

                quote! {
                    #setter => {
                        let arg = FromValue::from_value(&value).ok_or_else(|| {
                            AccessError::type_mismatch(#name, accessor, #ty_text, &value)
                        })?;

                        SetterOutcome::into_outcome(self.#setter_method(arg))
                            .map_err(|message| AccessError::invocation(#name, accessor, message))
                    }
                }
            });

            quote! {
                fn invoke_setter(
                    &mut self,
                    accessor: &str,
                    value: ::fieldcopy::value::Value,
                ) -> Result<(), ::fieldcopy::error::AccessError> {
                    #[allow(unused_imports)]
                    use ::fieldcopy::{
                        error::AccessError,
                        traits::{FromValue, SetterOutcome},
                    };

                    match accessor {
                        #(#arms)*
                        _ => Err(AccessError::no_such_accessor(#name, accessor)),
                    }
                }
            }
        });

        quote! {
            impl ::fieldcopy::traits::Bean for #ident {
                fn bean_type(&self) -> &'static ::fieldcopy::model::BeanType {
                    <Self as ::fieldcopy::traits::BeanSchema>::BEAN_TYPE
                }

                #parent_methods

                fn read_declared(
                    &self,
                    field: &str,
                ) -> Result<::fieldcopy::value::Value, ::fieldcopy::error::AccessError> {
                    #[allow(unused_imports)]
                    use ::fieldcopy::{error::AccessError, traits::ToValue};

                    match field {
                        #(#read_arms)*
                        _ => Err(AccessError::no_such_field(#name, field)),
                    }
                }

                #[allow(unused_variables)]
                fn write_declared(
                    &mut self,
                    field: &str,
                    value: ::fieldcopy::value::Value,
                ) -> Result<(), ::fieldcopy::error::AccessError> {
                    #[allow(unused_imports)]
                    use ::fieldcopy::{error::AccessError, traits::FromValue};

                    match field {
                        #(#write_arms)*
                        _ => Err(AccessError::no_such_field(#name, field)),
                    }
                }

                #getter_fn

                #setter_fn
            }
        }
    }
}

// derive_bean
pub fn derive_bean(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let bean = match BeanInput::from_derive_input(&input)
        .map_err(|err| err.write_errors())
        .and_then(|input| Bean::from_input(input).map_err(|err| err.to_compile_error()))
    {
        Ok(bean) => bean,
        Err(tokens) => return tokens,
    };

    let schema_impl = bean.schema_impl();
    let bean_impl = bean.bean_impl();

    quote! {
        #schema_impl
        #bean_impl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand(input: DeriveInput) -> String {
        derive_bean(quote!(#input)).to_string()
    }

    #[test]
    fn registers_fields_and_accessor_names() {
        let out = expand(parse_quote! {
            #[bean(accessors)]
            struct ItemA {
                code: Option<String>,
                sex: bool,
                is_active: bool,
                #[bean(readonly)]
                id: u64,
                #[bean(skip)]
                cache: Vec<u8>,
            }
        });

        assert!(out.contains("\"getCode\""));
        assert!(out.contains("\"isSex\""));
        assert!(out.contains("\"is_active\""));
        assert!(out.contains("\"setIs_active\""));
        assert!(out.contains("get_code"));
        assert!(out.contains("set_is_active"));
        // readonly fields are listed but get no accessors
        assert!(out.contains("\"id\""));
        assert!(!out.contains("\"getId\""));
        assert!(!out.contains("\"cache\""));
    }

    #[test]
    fn no_accessor_tables_without_opt_in() {
        let out = expand(parse_quote! {
            struct Plain {
                code: String,
            }
        });

        assert!(!out.contains("getCode"));
        assert!(!out.contains("invoke_getter"));
        assert!(!out.contains("invoke_setter"));
    }

    #[test]
    fn parent_links_schema_and_instance() {
        let out = expand(parse_quote! {
            struct Child {
                #[bean(parent)]
                base: Base,
                name: String,
            }
        });

        assert!(out.contains("fn parent"));
        assert!(out.contains("BEAN_TYPE"));
        assert!(!out.contains("\"base\""));
    }

    #[test]
    fn rejects_invalid_input() {
        let errors = [
            expand(parse_quote! { struct Tuple(u32); }),
            expand(parse_quote! { enum Kind { A } }),
            expand(parse_quote! { struct Generic<T> { value: T } }),
            expand(parse_quote! {
                struct TwoParents {
                    #[bean(parent)] a: A,
                    #[bean(parent)] b: B,
                }
            }),
            expand(parse_quote! {
                #[bean(proxy)]
                struct Orphan { hits: u32 }
            }),
            expand(parse_quote! {
                struct Camel { #[allow(non_snake_case)] isActive: bool }
            }),
        ];

        for out in errors {
            assert!(out.contains("compile_error"), "expected error, got: {out}");
        }
    }
}

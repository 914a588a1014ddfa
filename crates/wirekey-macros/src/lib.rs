//! wirekey-macros - `#[derive(WireKeys)]`
//!
//! The derive emits the same `impl ::wirekey::WireKeys` block that
//! `wirekey generate` writes for a model, so the two can be used
//! interchangeably. Use it through the `wirekey` crate, which the expansion
//! refers to by absolute path.

use darling::ast::Data;
use darling::util::{Flag, Ignored};
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use syn::ext::IdentExt;
use syn::{DeriveInput, parse_macro_input};
use wirekey_codegen::model::annotated_wire_key;
use wirekey_codegen::{Annotations, ModelDescription, PropertyDescription, compose_block};

/// Options for the WireKeys derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(wirekey), supports(struct_named, struct_unit))]
struct WireKeysOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<Ignored, FieldOpts>,

    /// Reject fields without an explicit wire key
    #[darling(default)]
    strict: Flag,
}

#[derive(Debug, FromField)]
#[darling(attributes(wirekey), forward_attrs(doc))]
struct FieldOpts {
    ident: Option<syn::Ident>,
    attrs: Vec<syn::Attribute>,

    /// The JSON key of this field (e.g., "full_name")
    #[darling(default)]
    json: Option<String>,
}

impl FieldOpts {
    /// `#[wirekey(json = "...")]` wins over a `/// @json ...` doc line
    fn wire_key(&self, name: &str) -> Option<String> {
        self.json
            .clone()
            .or_else(|| annotated_wire_key(name, &Annotations::from_attrs(&self.attrs)))
    }
}

/// Derive the field-name to wire-key table of a struct
///
/// # Example
///
/// ```ignore
/// use wirekey::{Deserialize, WireKeys};
///
/// #[derive(Deserialize, WireKeys)]
/// struct User {
///     #[wirekey(json = "user_id")]
///     id: i64,
///
///     /// @json full_name
///     full_name: String,
/// }
/// ```
///
/// Fields without a key travel under their own name. With
/// `#[wirekey(strict)]` on the struct such fields are a compile error.
#[proc_macro_derive(WireKeys, attributes(wirekey))]
pub fn derive_wire_keys(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}

fn expand(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let opts = WireKeysOpts::from_derive_input(input)?;

    if !opts.generics.params.is_empty() {
        return Err(darling::Error::custom("WireKeys cannot be derived for generic types")
            .with_span(&opts.generics));
    }

    let fields = opts
        .data
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum"))?;

    let mut errors = darling::Error::accumulator();
    let mut properties = Vec::with_capacity(fields.len());

    for field in &fields.fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let mut property = PropertyDescription::new(ident.unraw().to_string());

        match field.wire_key(&property.name) {
            Some(key) => property = property.with_wire_key(key),
            None if opts.strict.is_present() => {
                errors.push(
                    darling::Error::custom(format!(
                        "field `{}` has no wire key; add #[wirekey(json = \"...\")]",
                        property.name
                    ))
                    .with_span(ident),
                );
            }
            None => {}
        }
        properties.push(property);
    }
    errors.finish()?;

    let model = ModelDescription::new(opts.ident.to_string(), properties);
    let block = compose_block(&model);

    block
        .source
        .parse()
        .map_err(|e: proc_macro2::LexError| darling::Error::custom(e.to_string()))
}

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{ToTokens, quote};
use syn::{
    Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

fn error_at<T: ToTokens>(tokens: T, message: &str) -> TokenStream {
    syn::Error::new_spanned(tokens, message)
        .to_compile_error()
        .into()
}

/// Derive macro for singly linked queue nodes.
///
/// The struct must have exactly two named fields: `link`, a `SingleLink<Self>`,
/// and `data`, the owned payload.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut crate_path = quote! { ::cstr_queue };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let mut link_field = None;
    let mut data_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            if let Some(ident) = &field.ident {
                match ident.to_string().as_str() {
                    "link" => link_field = Some(field.clone()),
                    "data" => data_field = Some(field.clone()),
                    _ => {
                        return error_at(ident, "Unexpected field name: expected 'link' or 'data'");
                    }
                }
            }
        }
    } else {
        return error_at(&input, "Node derive macro only supports structs with named fields");
    };

    let Some(link_field) = link_field else {
        return error_at(struct_name, "Struct must have a field named 'link'");
    };
    let Some(data_field) = data_field else {
        return error_at(struct_name, "Struct must have a field named 'data'");
    };

    let link_type = &link_field.ty;
    let is_single_link = match link_type {
        Type::Path(TypePath { path, .. }) => path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "SingleLink"),
        _ => false,
    };
    if !is_single_link {
        return error_at(link_type, "Field 'link' must be a 'SingleLink<Self>'");
    }

    let link_impl: TokenStream2 = quote! {
        impl #impl_generics #intrusive_path::traits::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                self.link.next()
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                self.link.set_next(next);
            }
        }

        impl #impl_generics #intrusive_path::traits::Node for #struct_name #ty_generics #where_clause {}
    };

    let data_type = &data_field.ty;
    let data_impl: TokenStream2 = quote! {
        impl #impl_generics #intrusive_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }
        }
    };

    let expanded = quote! {
        #link_impl
        #data_impl
    };

    TokenStream::from(expanded)
}

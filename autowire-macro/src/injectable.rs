use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Index, Member, Meta, Type};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = generate_injectable_impl(&input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => panic!("#[derive(Injectable)] can only be applied to structs"),
    };

    let mut field_wirings = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        if !is_marked(field) {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };
        let target = extract_inject_target(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(
                &field.ty,
                "#[inject] fields must be declared as `Inject<T>` or `Inject<dyn Trait>`",
            )
        })?;

        let wire_method = match target {
            Type::TraitObject(_) => quote!(autowire_interface),
            _ => quote!(autowire),
        };
        field_wirings.push(quote! {
            injector.#wire_method(&self.#member);
        });
    }

    let injector_param = if field_wirings.is_empty() {
        quote!(_injector)
    } else {
        quote!(injector)
    };

    Ok(quote! {
        impl #impl_generics ::autowire::Injectable for #struct_name #ty_generics #where_clause {
            fn wire(&self, #injector_param: &::autowire::Injector) {
                #(#field_wirings)*
            }
        }
    })
}

/// Only the bare `#[inject]` marker counts; `#[inject(..)]` and `#[inject = ..]` are ignored.
fn is_marked(field: &Field) -> bool {
    field
        .attrs
        .iter()
        .any(|attr| matches!(&attr.meta, Meta::Path(path) if path.is_ident("inject")))
}

/// Extract `T` from `Inject<T>`
fn extract_inject_target(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Inject" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner_type) => Some(inner_type),
        _ => None,
    }
}

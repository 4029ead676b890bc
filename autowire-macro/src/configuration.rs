use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type};

struct ProviderInfo {
    fn_name: syn::Ident,
    returns_arc: bool,
}

pub fn configuration_attribute(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = TokenStream2::from(attr);
        return syn::Error::new_spanned(attr, "#[configuration] takes no arguments")
            .into_compile_error()
            .into();
    }
    let input = parse_macro_input!(item as ItemImpl);
    let expanded = generate_configuration_impl(input).unwrap_or_else(syn::Error::into_compile_error);
    TokenStream::from(expanded)
}

fn generate_configuration_impl(input: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[configuration] must be placed on an inherent impl block",
        ));
    }

    let mut providers: Vec<ProviderInfo> = Vec::new();
    let mut clean_items: Vec<ImplItem> = Vec::new();

    for item in input.items.iter() {
        match item {
            ImplItem::Fn(method) if method.attrs.iter().any(is_provide_attr) => {
                providers.push(extract_provider_info(method)?);
                let mut clean_method = method.clone();
                clean_method.attrs.retain(|attr| !is_provide_attr(attr));
                clean_items.push(ImplItem::Fn(clean_method));
            }
            _ => clean_items.push(item.clone()),
        }
    }

    let provider_calls = providers.iter().map(|provider| {
        let fn_name = &provider.fn_name;
        if provider.returns_arc {
            quote! { injector.set_shared(self.#fn_name()); }
        } else {
            quote! { injector.set(self.#fn_name()); }
        }
    });

    let injector_param = if providers.is_empty() {
        quote!(_injector)
    } else {
        quote!(injector)
    };

    let attrs = &input.attrs;
    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #(#attrs)*
        impl #impl_generics #self_ty #where_clause {
            #(#clean_items)*
        }

        impl #impl_generics ::autowire::Configuration for #self_ty #where_clause {
            fn provide(&self, #injector_param: &::autowire::Injector) {
                #(#provider_calls)*
            }
        }
    })
}

fn extract_provider_info(method: &ImplItemFn) -> syn::Result<ProviderInfo> {
    let sig = &method.sig;

    if sig.asyncness.is_some() || !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            sig,
            "#[provide] methods must be plain, non-generic, synchronous methods",
        ));
    }

    let takes_only_ref_self = sig.inputs.len() == 1
        && matches!(
            sig.inputs.first(),
            Some(FnArg::Receiver(receiver)) if receiver.reference.is_some() && receiver.mutability.is_none()
        );
    if !takes_only_ref_self {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "#[provide] methods must take `&self` and no other arguments",
        ));
    }

    let return_type = match &sig.output {
        ReturnType::Type(_, ty) => &**ty,
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(
                sig,
                "#[provide] methods must return exactly one value",
            ));
        }
    };
    if let Type::Tuple(_) = return_type {
        return Err(syn::Error::new_spanned(
            return_type,
            "#[provide] methods must return exactly one value, not a tuple",
        ));
    }

    let shared_type = extract_arc_target(return_type);
    if let Some(Type::TraitObject(_)) = shared_type {
        return Err(syn::Error::new_spanned(
            return_type,
            "#[provide] methods must return a concrete type; interface lookups find it by capability",
        ));
    }

    Ok(ProviderInfo {
        fn_name: sig.ident.clone(),
        returns_arc: shared_type.is_some(),
    })
}

/// Extract `T` from `Arc<T>`
fn extract_arc_target(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Arc" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner_type) => Some(inner_type),
        _ => None,
    }
}

fn is_provide_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("provide")
}

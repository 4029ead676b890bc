use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, parse_macro_input, Token, Type};

/// Parses: dyn Trait => [ImplA, ImplB]
struct InterfaceArgs {
    trait_type: Type,
    impl_types: Vec<Type>,
}

impl Parse for InterfaceArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let trait_type: Type = input.parse()?;
        if !matches!(trait_type, Type::TraitObject(_)) {
            return Err(syn::Error::new_spanned(
                &trait_type,
                "interface! expects a trait object type such as `dyn Trait`",
            ));
        }
        input.parse::<Token![=>]>()?;

        let content;
        syn::bracketed!(content in input);
        let impl_types = content
            .parse_terminated(Type::parse, Token![,])?
            .into_iter()
            .collect();

        if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
        }

        Ok(InterfaceArgs {
            trait_type,
            impl_types,
        })
    }
}

pub fn interface_macro(input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(input as InterfaceArgs);
    let expanded = generate_interface_impl(&args);

    TokenStream::from(expanded)
}

fn generate_interface_impl(args: &InterfaceArgs) -> TokenStream2 {
    let trait_type = &args.trait_type;
    let impl_types = &args.impl_types;

    // Cast stored values against every declared implementation
    let casts = impl_types.iter().map(|impl_type| {
        quote! {
            if let ::core::result::Result::Ok(concrete) =
                ::std::sync::Arc::clone(shared).downcast::<#impl_type>()
            {
                let upcast: ::std::sync::Arc<#trait_type> = concrete;
                let erased: ::autowire::Shared = ::std::sync::Arc::new(upcast);
                return ::core::option::Option::Some(erased);
            }
        }
    });

    let wirings = impl_types.iter().map(|impl_type| {
        quote! {
            if let ::core::result::Result::Ok(concrete) =
                ::std::sync::Arc::clone(shared).downcast::<#impl_type>()
            {
                injector.apply(&concrete);
                return;
            }
        }
    });

    quote! {
        impl ::autowire::Service for #trait_type {
            fn type_key() -> ::autowire::TypeKey {
                #[allow(unused_variables)]
                fn satisfied_by(
                    shared: &::autowire::Shared,
                ) -> ::core::option::Option<::autowire::Shared> {
                    if (**shared).is::<::std::sync::Arc<#trait_type>>() {
                        return ::core::option::Option::Some(::std::sync::Arc::clone(shared));
                    }
                    #(#casts)*
                    ::core::option::Option::None
                }

                #[allow(unused_variables)]
                fn wire(shared: &::autowire::Shared, injector: &::autowire::Injector) {
                    #(#wirings)*
                }

                ::autowire::TypeKey::interface::<#trait_type>(satisfied_by, wire)
            }

            fn into_shared(this: ::std::sync::Arc<Self>) -> ::autowire::Shared {
                ::std::sync::Arc::new(this)
            }

            fn from_shared(
                shared: ::autowire::Shared,
            ) -> ::core::option::Option<::std::sync::Arc<Self>> {
                shared
                    .downcast::<::std::sync::Arc<#trait_type>>()
                    .ok()
                    .map(|wrapper| ::std::sync::Arc::clone(&*wrapper))
            }
        }

        #(
            impl ::autowire::Implements<#trait_type> for #impl_types {}
        )*
    }
}

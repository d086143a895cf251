use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

/// Expands `#[ridge_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.fn_token,
            "#[ridge_runtime::main] can only be applied to async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[ridge_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let preset = match runtime_preset(args) {
        Ok(preset) => preset,
        Err(err) => return err.to_compile_error(),
    };

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #preset;
            let rt = ::ridge_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn runtime_preset(args: TokenStream) -> Result<TokenStream, Error> {
    if args.is_empty() {
        return Ok(quote! { ::ridge_runtime::RuntimeConfig::default() });
    }

    let profile: Ident = syn::parse2(args)?;
    match profile.to_string().as_str() {
        "high_performance" => Ok(quote! { ::ridge_runtime::RuntimeConfig::high_performance() }),
        "default" => Ok(quote! { ::ridge_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(
            profile,
            "unknown runtime profile, expected one of: high_performance, default",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}

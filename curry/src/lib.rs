use itertools::Itertools;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Error, FnArg, ItemFn, PatType, Result, ReturnType, Signature};

/// Rewrites an `fn` of two or more arguments into a curried chain of
/// single-argument closures, so that `f(a, b, c)` is called as
/// `f(a)(b)(c)`. Works on free functions and on methods that take
/// `self` by value; generics and argument patterns are preserved.
#[proc_macro_attribute]
pub fn curry(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(item as ItemFn);
    curried(parsed)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

fn curried(parsed: ItemFn) -> Result<TokenStream2> {
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parsed;
    let Signature {
        ident,
        generics,
        inputs,
        output,
        ..
    } = sig;

    let span = ident.span();
    let mut inputs = inputs.into_iter();

    // The receiver (if any) and the first typed argument stay in the
    // generated signature; every later argument becomes a closure layer.
    let (receiver, head) = match inputs.next() {
        Some(FnArg::Receiver(receiver)) => {
            let head = inputs.next().ok_or_else(|| missing_argument(span))?;
            (Some(receiver), typed(head)?)
        }
        Some(argument) => (None, typed(argument)?),
        None => return Err(missing_argument(span)),
    };

    let tail: Vec<PatType> = inputs.map(typed).try_collect()?;
    if tail.is_empty() {
        return Err(Error::new(
            head.span(),
            "cannot curry a function of a single argument",
        ));
    }

    let ret = match output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, ty) => quote!(#ty),
    };

    // Built inside out: the innermost closure takes the last argument and
    // runs the original body, each enclosing layer boxes the one below it,
    // and the outermost layer is returned unboxed as `impl Fn`.
    let mut chain = quote!(#block);
    let mut chain_ty = ret;
    for (depth, PatType { pat, ty, .. }) in tail.iter().enumerate().rev() {
        if depth == 0 {
            chain = quote!(move |#pat| #chain);
            chain_ty = quote!(impl Fn(#ty) -> #chain_ty);
        } else {
            chain = quote!(Box::new(move |#pat| #chain));
            chain_ty = quote!(Box<dyn Fn(#ty) -> #chain_ty>);
        }
    }

    let params = match receiver {
        Some(receiver) => quote!(#receiver, #head),
        None => quote!(#head),
    };

    Ok(quote! {
        #(#attrs)*
        #vis fn #ident #generics (#params) -> #chain_ty {
            #chain
        }
    })
}

fn typed(argument: FnArg) -> Result<PatType> {
    match argument {
        FnArg::Typed(argument) => Ok(argument),
        FnArg::Receiver(receiver) => Err(Error::new(
            receiver.span(),
            "`self` must be the first parameter",
        )),
    }
}

fn missing_argument(span: Span) -> Error {
    Error::new(span, "expected at least one argument besides `self`")
}

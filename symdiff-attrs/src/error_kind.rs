use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    MetaNameValue,
    Result,
    Token,
};

/// The tags of an `#[error(...)]` attribute.
#[derive(Debug)]
pub struct ErrorArgs {
    /// Evaluates to the one-line message.
    pub message: Expr,

    /// Evaluates to an iterable of labels, one per span.
    pub labels: Option<Expr>,

    /// Evaluates to the help text, if any.
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Finds the `error` attribute among `attrs` and reads its `tag = expr` pairs.
    ///
    /// `span_source` is used to place the error if the attribute or its `message` is missing.
    fn from_attrs(attrs: &[Attribute], span_source: &Ident) -> Result<Self> {
        let attr = attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(
                span_source.span(),
                "deriving `ErrorKind` requires an `#[error(...)]` attribute",
            ))?;
        let pairs = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;

        let (mut message, mut labels, mut help) = (None, None, None);
        for pair in pairs {
            let slot = match pair.path.get_ident().map(Ident::to_string).as_deref() {
                Some("message") => &mut message,
                Some("labels") => &mut labels,
                Some("help") => &mut help,
                _ => return Err(syn::Error::new_spanned(
                    &pair.path,
                    "expected one of `message`, `labels`, or `help`",
                )),
            };
            if slot.replace(pair.value).is_some() {
                return Err(syn::Error::new_spanned(&pair.path, "this tag is given more than once"));
            }
        }

        let message = message.ok_or_else(|| syn::Error::new(
            span_source.span(),
            "missing `message` tag in `#[error(...)]`",
        ))?;
        Ok(Self { message, labels, help })
    }
}

/// Builds the statement that brings the fields of `self` into scope under their own names, so the
/// tag expressions can refer to them directly. Unit structs need no statement.
fn field_bindings(fields: &Fields) -> Result<TokenStream2> {
    match fields {
        Fields::Named(named) => {
            let names = named.named.iter().map(|field| &field.ident);
            Ok(quote! { let Self { #(#names),* } = self; })
        },
        Fields::Unit => Ok(TokenStream2::new()),
        Fields::Unnamed(unnamed) => Err(syn::Error::new_spanned(
            unnamed,
            "`ErrorKind` can only be derived for structs with named fields or unit structs",
        )),
    }
}

/// A struct that `ErrorKind` is being derived for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub bindings: TokenStream2,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<DeriveInput>()?;
        let Data::Struct(data) = &item.data else {
            return Err(syn::Error::new(item.ident.span(), "`ErrorKind` can only be derived for structs"));
        };

        let bindings = field_bindings(&data.fields)?;
        let error_args = ErrorArgs::from_attrs(&item.attrs, &item.ident)?;
        Ok(ErrorKindTarget {
            name: item.ident,
            bindings,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bindings = &self.bindings;
        let message = &self.error_args.message;
        let labels = self.error_args.labels.as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { Vec::<String>::new() });
        let help = self.error_args.help.as_ref().map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            #[allow(unused_variables)]
            fn message(&self) -> String {
                #bindings
                (#message).to_string()
            }

            #[allow(unused_variables, unused_mut)]
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #bindings

                let offset = spans.first().map(|span| span.start).unwrap_or(0);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(symdiff_error::ErrorKind::message(self))
                    .with_labels(
                        #labels
                            .into_iter()
                            .zip(spans.iter())
                            .map(|(label_str, span)| {
                                let label_str = label_str.to_string();
                                let mut label = ariadne::Label::new((src_id, span.clone()))
                                    .with_color(symdiff_error::EXPR);

                                if !label_str.is_empty() {
                                    label = label.with_message(label_str);
                                }

                                label
                            })
                            .collect::<Vec<_>>()
                    );

                #help
                builder.finish()
            }
        });
    }
}

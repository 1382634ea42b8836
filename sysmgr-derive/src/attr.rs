use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, LitInt, LitStr, Result, Token, token};

/// Options collected from `#[field(..)]`, plus serde's `rename`.
#[derive(Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub pattern: Option<String>,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut out = Self::default();
        let mut serde_rename = None;

        for attr in attrs {
            if attr.path().is_ident("field") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
                    } else if meta.path.is_ident("required") {
                        out.required = true;
                    } else if meta.path.is_ident("min_len") {
                        out.min_len = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
                    } else if meta.path.is_ident("max_len") {
                        out.max_len = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
                    } else if meta.path.is_ident("min") {
                        out.min = Some(parse_signed(&meta)?);
                    } else if meta.path.is_ident("max") {
                        out.max = Some(parse_signed(&meta)?);
                    } else if meta.path.is_ident("pattern") {
                        out.pattern = Some(meta.value()?.parse::<LitStr>()?.value());
                    } else {
                        return Err(meta.error(
                            "expected one of: rename, required, min_len, max_len, min, max, pattern",
                        ));
                    }
                    Ok(())
                })?;
            } else if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                        serde_rename = Some(meta.value()?.parse::<LitStr>()?.value());
                        Ok(())
                    } else {
                        skip(&meta)
                    }
                })?;
            }
        }

        if out.rename.is_none() {
            out.rename = serde_rename;
        }
        Ok(out)
    }
}

fn parse_signed(meta: &ParseNestedMeta) -> Result<i64> {
    let input = meta.value()?;
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let value: i64 = input.parse::<LitInt>()?.base10_parse()?;
    Ok(if negative { -value } else { value })
}

// Serde options other than `rename = ".."` are not ours to interpret.
fn skip(meta: &ParseNestedMeta) -> Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<Expr>()?;
    } else if meta.input.peek(token::Paren) {
        meta.parse_nested_meta(|nested| skip(&nested))?;
    }
    Ok(())
}

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Field, Fields};

// derive_scan_row
pub fn derive_scan_row(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = if let Data::Struct(data) = &input.data {
        if let Fields::Named(named) = &data.fields {
            &named.named
        } else {
            let err = Error::new_spanned(
                &data.fields,
                "ScanRow can only be derived for structs with named fields",
            );
            return err.to_compile_error();
        }
    } else {
        let err = Error::new_spanned(
            &input.ident,
            "ScanRow can only be derived for structs with named fields",
        );
        return err.to_compile_error();
    };

    let mut skips = Vec::with_capacity(fields.len());
    for field in fields {
        match field_skip_flag(field) {
            Ok(skip) => skips.push(skip),
            Err(err) => return err.to_compile_error(),
        }
    }

    let field_specs = fields.iter().zip(&skips).map(|(field, skip)| {
        let field_name = field.ident.as_ref().expect("named field").to_string();
        let settable = !skip;

        quote! {
            ::mockhouse::scan::FieldSpec {
                name: #field_name,
                settable: #settable,
            },
        }
    });

    let assign_match_arms =
        fields
            .iter()
            .zip(&skips)
            .enumerate()
            .filter_map(|(index, (field, skip))| {
                if *skip {
                    return None;
                }
                let field_ident = field.ident.as_ref().expect("named field");

                Some(quote! {
                    #index => ::mockhouse::value::assign(value, &mut self.#field_ident),
                })
            });

    // With no settable field the `value` parameter would go unused.
    let silence_unused = if skips.iter().all(|skip| *skip) {
        quote! { let _ = value; }
    } else {
        quote! {}
    };

    quote! {
        impl #impl_generics ::mockhouse::scan::ScanRow for #ident #ty_generics #where_clause {
            const FIELDS: &'static [::mockhouse::scan::FieldSpec] = &[
                #(#field_specs)*
            ];

            fn assign_field(
                &mut self,
                index: usize,
                value: &::mockhouse::value::Value,
            ) -> Result<(), ::mockhouse::value::AssignError> {
                #silence_unused
                match index {
                    #(#assign_match_arms)*
                    _ => Ok(()),
                }
            }
        }
    }
}

// field_skip_flag
fn field_skip_flag(field: &Field) -> Result<bool, Error> {
    let mut skip = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("scan") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported scan attribute; expected `skip`"))
            }
        })?;
    }

    Ok(skip)
}

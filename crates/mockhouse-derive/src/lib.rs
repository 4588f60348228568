use proc_macro::TokenStream;

mod scan_row;

#[proc_macro_derive(ScanRow, attributes(scan))]
pub fn derive_scan_row(input: TokenStream) -> TokenStream {
    scan_row::derive_scan_row(input.into()).into()
}

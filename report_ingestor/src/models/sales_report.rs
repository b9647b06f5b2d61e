//! One line of a Sales and Trends summary report.
//!
//! Column names and order follow the vendor's TSV layout. The same names are
//! used as JSON keys and as the CSV/TSV header when re-encoding.

crate::report_row! {
    /// A decoded Sales and Trends row.
    ///
    /// Produced fresh for every line of a payload by
    /// [`decode_rows`](crate::providers::app_store::response::decode_rows).
    pub struct SalesReportRow {
        provider: String => "Provider",
        provider_country: String => "Provider Country",
        sku: String => "SKU",
        developer: String => "Developer",
        title: String => "Title",
        version: String => "Version",
        product_type_identifier: String => "Product Type Identifier",
        /// Negative for refunds.
        units: i64 => "Units",
        developer_proceeds: f64 => "Developer Proceeds",
        /// MM/DD/YYYY as sent by the vendor.
        begin_date: String => "Begin Date",
        end_date: String => "End Date",
        customer_currency: String => "Customer Currency",
        country_code: String => "Country Code",
        currency_of_proceeds: String => "Currency of Proceeds",
        apple_identifier: u64 => "Apple Identifier",
        customer_price: f64 => "Customer Price",
        promo_code: String => "Promo Code",
        parent_identifier: String => "Parent Identifier",
        subscription: String => "Subscription",
        period: String => "Period",
        category: String => "Category",
        cmb: String => "CMB",
        device: String => "Device",
        supported_platforms: String => "Supported Platforms",
        proceeds_reason: String => "Proceeds Reason",
        preserved_pricing: String => "Preserved Pricing",
        client: String => "Client",
        order_type: String => "Order Type",
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::SalesReportRow;

    /// A minimal but complete row; `sku` and `units` vary per test.
    pub(crate) fn sales_row(sku: &str, units: i64) -> SalesReportRow {
        SalesReportRow {
            provider: "APPLE".into(),
            provider_country: "US".into(),
            sku: sku.into(),
            developer: "Example Dev".into(),
            title: "Example App".into(),
            version: "1.0".into(),
            product_type_identifier: "1F".into(),
            units,
            developer_proceeds: 0.7,
            begin_date: "09/08/2019".into(),
            end_date: "09/08/2019".into(),
            customer_currency: "USD".into(),
            country_code: "US".into(),
            currency_of_proceeds: "USD".into(),
            apple_identifier: 1_234_567_890,
            customer_price: 0.99,
            promo_code: String::new(),
            parent_identifier: String::new(),
            subscription: String::new(),
            period: String::new(),
            category: "Games".into(),
            cmb: String::new(),
            device: "iPhone".into(),
            supported_platforms: "iOS".into(),
            proceeds_reason: String::new(),
            preserved_pricing: String::new(),
            client: String::new(),
            order_type: String::new(),
        }
    }
}

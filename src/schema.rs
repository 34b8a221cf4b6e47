//! Table definitions and DDL text.

use std::fmt::Write;

/// Name of the key column of a generic table.
pub const KEY_COLUMN: &str = "YCSB_KEY";
/// Prefix of the value columns of a generic table.
pub const FIELD_PREFIX: &str = "FIELD";

/// A compiled-in table definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableDef {
    /// Table name.
    pub name: &'static str,
    /// Column names and SQL types, in declaration order.
    pub columns: &'static [(&'static str, &'static str)],
    /// Columns forming the primary key.
    pub primary_key: &'static [&'static str],
}

impl TableDef {
    /// Renders the content between the parentheses of `CREATE TABLE`.
    ///
    /// The primary key is always written as a table constraint, so that
    /// composite keys are expressed in a form every dialect accepts.
    pub fn column_definitions(&self) -> String {
        let mut res = String::new();
        for (name, ty) in self.columns {
            write!(res, "{name} {ty}, ").unwrap();
        }
        write!(res, "PRIMARY KEY ({})", self.primary_key.join(", ")).unwrap();
        res
    }
}

/// Column definitions of a generic table with `field_count` text fields.
pub fn generic_column_definitions(field_count: u32) -> String {
    let mut res = format!("{KEY_COLUMN} VARCHAR PRIMARY KEY");
    for idx in 0..field_count {
        write!(res, ", {FIELD_PREFIX}{idx} TEXT").unwrap();
    }
    res
}

pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {table};")
}

pub fn create_table_sql(table: &str, column_definitions: &str) -> String {
    format!("CREATE TABLE {table} ({column_definitions});")
}

/// Looks up a TPC-DS table by name.
pub fn find_tpc_ds_table(name: &str) -> Option<&'static TableDef> {
    TPC_DS_TABLES
        .binary_search_by(|t| t.name.cmp(name))
        .ok()
        .map(|i| &TPC_DS_TABLES[i])
}

/// The TPC-DS tables, sorted by name.
///
/// The `customer` table reuses the column list of `customer_address`, as the
/// schema this tool has always shipped with does.
pub static TPC_DS_TABLES: &[TableDef] = &[
    TableDef {
        name: "call_center",
        columns: &[
            ("cc_call_center_id", "char(16)"),
            ("cc_rec_start_date", "date"),
            ("cc_rec_end_date", "date"),
            ("cc_closed_date_sk", "integer"),
            ("cc_open_date_sk", "integer"),
            ("cc_name", "varchar(50)"),
            ("cc_class", "varchar(50)"),
            ("cc_employees", "integer"),
            ("cc_sq_ft", "integer"),
            ("cc_hours", "char(20)"),
            ("cc_manager", "varchar(40)"),
            ("cc_mkt_id", "integer"),
            ("cc_mkt_class", "char(50)"),
            ("cc_mkt_desc", "varchar(100)"),
            ("cc_market_manager", "varchar(40)"),
            ("cc_division", "integer"),
            ("cc_division_name", "varchar(50)"),
            ("cc_company", "integer"),
            ("cc_company_name", "char(50)"),
            ("cc_street_number", "char(10)"),
            ("cc_street_name", "varchar(60)"),
            ("cc_street_type", "char(15)"),
            ("cc_suite_number", "char(10)"),
            ("cc_city", "varchar(60)"),
            ("cc_county", "varchar(30)"),
            ("cc_state", "char(2)"),
            ("cc_zip", "char(10)"),
            ("cc_country", "varchar(20)"),
            ("cc_gmt_offset", "decimal(5,2)"),
            ("cc_tax_percentage", "decimal(5,2)"),
        ],
        primary_key: &["cc_call_center_id"],
    },
    TableDef {
        name: "catalog_page",
        columns: &[
            ("cp_catalog_page_sk", "integer"),
            ("cp_catalog_page_id", "char(16)"),
            ("cp_start_date_sk", "integer"),
            ("cp_end_date_sk", "integer"),
            ("cp_department", "varchar(50)"),
            ("cp_catalog_number", "integer"),
            ("cp_catalog_page_number", "integer"),
            ("cp_description", "varchar(100)"),
            ("cp_type", "varchar(100)"),
        ],
        primary_key: &["cp_catalog_page_sk"],
    },
    TableDef {
        name: "catalog_returns",
        columns: &[
            ("cr_returned_date_sk", "integer"),
            ("cr_returned_time_sk", "integer"),
            ("cr_item_sk", "integer"),
            ("cr_refunded_customer_sk", "integer"),
            ("cr_refunded_cdemo_sk", "integer"),
            ("cr_refunded_hdemo_sk", "integer"),
            ("cr_refunded_addr_sk", "integer"),
            ("cr_returning_customer_sk", "integer"),
            ("cr_returning_cdemo_sk", "integer"),
            ("cr_returning_hdemo_sk", "integer"),
            ("cr_returning_addr_sk", "integer"),
            ("cr_call_center_sk", "integer"),
            ("cr_catalog_page_sk", "integer"),
            ("cr_ship_mode_sk", "integer"),
            ("cr_warehouse_sk", "integer"),
            ("cr_reason_sk", "integer"),
            ("cr_order_number", "integer"),
            ("cr_return_quantity", "integer"),
            ("cr_return_amount", "decimal(7,2)"),
            ("cr_return_tax", "decimal(7,2)"),
            ("cr_return_amt_inc_tax", "decimal(7,2)"),
            ("cr_fee", "decimal(7,2)"),
            ("cr_return_ship_cost", "decimal(7,2)"),
            ("cr_refunded_cash", "decimal(7,2)"),
            ("cr_reversed_charge", "decimal(7,2)"),
            ("cr_store_credit", "decimal(7,2)"),
            ("cr_net_loss", "decimal(7,2)"),
        ],
        primary_key: &["cr_item_sk", "cr_order_number"],
    },
    TableDef {
        name: "catalog_sales",
        columns: &[
            ("cs_sold_date_sk", "integer"),
            ("cs_sold_time_sk", "integer"),
            ("cs_ship_date_sk", "integer"),
            ("cs_bill_customer_sk", "integer"),
            ("cs_bill_cdemo_sk", "integer"),
            ("cs_bill_hdemo_sk", "integer"),
            ("cs_bill_addr_sk", "integer"),
            ("cs_ship_customer_sk", "integer"),
            ("cs_ship_cdemo_sk", "integer"),
            ("cs_ship_hdemo_sk", "integer"),
            ("cs_ship_addr_sk", "integer"),
            ("cs_call_center_sk", "integer"),
            ("cs_catalog_page_sk", "integer"),
            ("cs_ship_mode_sk", "integer"),
            ("cs_warehouse_sk", "integer"),
            ("cs_item_sk", "integer"),
            ("cs_promo_sk", "integer"),
            ("cs_order_number", "integer"),
            ("cs_quantity", "integer"),
            ("cs_wholesale_cost", "decimal(7,2)"),
            ("cs_list_price", "decimal(7,2)"),
            ("cs_sales_price", "decimal(7,2)"),
            ("cs_ext_discount_amt", "decimal(7,2)"),
            ("cs_ext_sales_price", "decimal(7,2)"),
            ("cs_ext_wholesale_cost", "decimal(7,2)"),
            ("cs_ext_list_price", "decimal(7,2)"),
            ("cs_ext_tax", "decimal(7,2)"),
            ("cs_coupon_amt", "decimal(7,2)"),
            ("cs_ext_ship_cost", "decimal(7,2)"),
            ("cs_net_paid", "decimal(7,2)"),
            ("cs_net_paid_inc_tax", "decimal(7,2)"),
            ("cs_net_paid_inc_ship", "decimal(7,2)"),
            ("cs_net_paid_inc_ship_tax", "decimal(7,2)"),
            ("cs_net_profit", "decimal(7,2)"),
        ],
        primary_key: &["cs_item_sk", "cs_order_number"],
    },
    TableDef {
        name: "customer",
        columns: &[
            ("ca_address_sk", "integer"),
            ("ca_address_id", "char(16)"),
            ("ca_street_number", "char(10)"),
            ("ca_street_name", "varchar(60)"),
            ("ca_street_type", "char(15)"),
            ("ca_suite_number", "char(10)"),
            ("ca_city", "varchar(60)"),
            ("ca_county", "varchar(30)"),
            ("ca_state", "char(2)"),
            ("ca_zip", "char(10)"),
            ("ca_country", "varchar(20)"),
            ("ca_gmt_offset", "decimal(5,2)"),
            ("ca_location_type", "char(20)"),
        ],
        primary_key: &["ca_address_sk"],
    },
    TableDef {
        name: "customer_address",
        columns: &[
            ("ca_address_sk", "integer"),
            ("ca_address_id", "char(16)"),
            ("ca_street_number", "char(10)"),
            ("ca_street_name", "varchar(60)"),
            ("ca_street_type", "char(15)"),
            ("ca_suite_number", "char(10)"),
            ("ca_city", "varchar(60)"),
            ("ca_county", "varchar(30)"),
            ("ca_state", "char(2)"),
            ("ca_zip", "char(10)"),
            ("ca_country", "varchar(20)"),
            ("ca_gmt_offset", "decimal(5,2)"),
            ("ca_location_type", "char(20)"),
        ],
        primary_key: &["ca_address_sk"],
    },
    TableDef {
        name: "customer_demographics",
        columns: &[
            ("cd_demo_sk", "integer"),
            ("cd_gender", "char(1)"),
            ("cd_marital_status", "char(1)"),
            ("cd_education_status", "char(20)"),
            ("cd_purchase_estimate", "integer"),
            ("cd_credit_rating", "char(10)"),
            ("cd_dep_count", "integer"),
            ("cd_dep_employed_count", "integer"),
            ("cd_dep_college_count", "integer"),
        ],
        primary_key: &["cd_demo_sk"],
    },
    TableDef {
        name: "date_dim",
        columns: &[
            ("d_date_sk", "integer"),
            ("d_date_id", "char(16)"),
            ("d_date", "date"),
            ("d_month_seq", "integer"),
            ("d_week_seq", "integer"),
            ("d_quarter_seq", "integer"),
            ("d_year", "integer"),
            ("d_dow", "integer"),
            ("d_moy", "integer"),
            ("d_dom", "integer"),
            ("d_qoy", "integer"),
            ("d_fy_year", "integer"),
            ("d_fy_quarter_seq", "integer"),
            ("d_fy_week_seq", "integer"),
            ("d_day_name", "char(9)"),
            ("d_quarter_name", "char(6)"),
            ("d_holiday", "char(1)"),
            ("d_weekend", "char(1)"),
            ("d_following_holiday", "char(1)"),
            ("d_first_dom", "integer"),
            ("d_last_dom", "integer"),
            ("d_same_day_ly", "integer"),
            ("d_same_day_lq", "integer"),
            ("d_current_day", "char(1)"),
            ("d_current_week", "char(1)"),
            ("d_current_month", "char(1)"),
            ("d_current_quarter", "char(1)"),
            ("d_current_year", "char(1)"),
        ],
        primary_key: &["d_date_sk"],
    },
    TableDef {
        name: "household_demographics",
        columns: &[
            ("hd_demo_sk", "integer"),
            ("hd_income_band_sk", "integer"),
            ("hd_buy_potential", "char(15)"),
            ("hd_dep_count", "integer"),
            ("hd_vehicle_count", "integer"),
        ],
        primary_key: &["hd_demo_sk"],
    },
    TableDef {
        name: "income_band",
        columns: &[
            ("ib_income_band_sk", "integer"),
            ("ib_lower_bound", "integer"),
            ("ib_upper_bound", "integer"),
        ],
        primary_key: &["ib_income_band_sk"],
    },
    TableDef {
        name: "inventory",
        columns: &[
            ("inv_date_sk", "integer"),
            ("inv_item_sk", "integer"),
            ("inv_warehouse_sk", "integer"),
            ("inv_quantity_on_hand", "integer"),
        ],
        primary_key: &["inv_date_sk", "inv_item_sk", "inv_warehouse_sk"],
    },
    TableDef {
        name: "item",
        columns: &[
            ("i_item_sk", "integer"),
            ("i_item_id", "char(16)"),
            ("i_rec_start_date", "date"),
            ("i_rec_end_date", "date"),
            ("i_item_desc", "varchar(200)"),
            ("i_current_price", "decimal(7,2)"),
            ("i_wholesale_cost", "decimal(7,2)"),
            ("i_brand_id", "integer"),
            ("i_brand", "char(50)"),
            ("i_class_id", "integer"),
            ("i_class", "char(50)"),
            ("i_category_id", "integer"),
            ("i_category", "char(50)"),
            ("i_manufact_id", "integer"),
            ("i_manufact", "char(50)"),
            ("i_size", "char(20)"),
            ("i_formulation", "char(20)"),
            ("i_color", "char(20)"),
            ("i_units", "char(10)"),
            ("i_container", "char(10)"),
            ("i_manager_id", "integer"),
            ("i_product_name", "char(50)"),
        ],
        primary_key: &["i_item_sk"],
    },
    TableDef {
        name: "promotion",
        columns: &[
            ("p_promo_sk", "integer"),
            ("p_promo_id", "char(16)"),
            ("p_start_date_sk", "integer"),
            ("p_end_date_sk", "integer"),
            ("p_item_sk", "integer"),
            ("p_cost", "decimal(15,2)"),
            ("p_response_target", "integer"),
            ("p_promo_name", "char(50)"),
            ("p_channel_dmail", "char(1)"),
            ("p_channel_email", "char(1)"),
            ("p_channel_catalog", "char(1)"),
            ("p_channel_tv", "char(1)"),
            ("p_channel_radio", "char(1)"),
            ("p_channel_press", "char(1)"),
            ("p_channel_event", "char(1)"),
            ("p_channel_demo", "char(1)"),
            ("p_channel_details", "varchar(100)"),
            ("p_purpose", "char(15)"),
            ("p_discount_active", "char(1)"),
        ],
        primary_key: &["p_promo_sk"],
    },
    TableDef {
        name: "reason",
        columns: &[
            ("r_reason_sk", "integer"),
            ("r_reason_id", "char(16)"),
            ("r_reason_desc", "char(100)"),
        ],
        primary_key: &["r_reason_sk"],
    },
    TableDef {
        name: "ship_mode",
        columns: &[
            ("sm_ship_mode_sk", "integer"),
            ("sm_ship_mode_id", "char(16)"),
            ("sm_type", "char(30)"),
            ("sm_code", "char(10)"),
            ("sm_carrier", "char(20)"),
            ("sm_contract", "char(20)"),
        ],
        primary_key: &["sm_ship_mode_sk"],
    },
    TableDef {
        name: "store",
        columns: &[
            ("s_store_sk", "integer"),
            ("s_store_id", "char(16)"),
            ("s_rec_start_date", "date"),
            ("s_rec_end_date", "date"),
            ("s_closed_date_sk", "integer"),
            ("s_store_name", "varchar(50)"),
            ("s_number_employees", "integer"),
            ("s_floor_space", "integer"),
            ("s_hours", "char(20)"),
            ("s_manager", "varchar(40)"),
            ("s_market_id", "integer"),
            ("s_geography_class", "varchar(100)"),
            ("s_market_desc", "varchar(100)"),
            ("s_market_manager", "varchar(40)"),
            ("s_division_id", "integer"),
            ("s_division_name", "varchar(50)"),
            ("s_company_id", "integer"),
            ("s_company_name", "varchar(50)"),
            ("s_street_number", "varchar(10)"),
            ("s_street_name", "varchar(60)"),
            ("s_street_type", "char(15)"),
            ("s_suite_number", "char(10)"),
            ("s_city", "varchar(60)"),
            ("s_county", "varchar(30)"),
            ("s_state", "char(2)"),
            ("s_zip", "char(10)"),
            ("s_country", "varchar(20)"),
            ("s_gmt_offset", "decimal(5,2)"),
            ("s_tax_precentage", "decimal(5,2)"),
        ],
        primary_key: &["s_store_sk"],
    },
    TableDef {
        name: "store_returns",
        columns: &[
            ("sr_returned_date_sk", "integer"),
            ("sr_return_time_sk", "integer"),
            ("sr_item_sk", "integer"),
            ("sr_customer_sk", "integer"),
            ("sr_cdemo_sk", "integer"),
            ("sr_hdemo_sk", "integer"),
            ("sr_addr_sk", "integer"),
            ("sr_store_sk", "integer"),
            ("sr_reason_sk", "integer"),
            ("sr_ticket_number", "integer"),
            ("sr_return_quantity", "integer"),
            ("sr_return_amt", "decimal(7,2)"),
            ("sr_return_tax", "decimal(7,2)"),
            ("sr_return_amt_inc_tax", "decimal(7,2)"),
            ("sr_fee", "decimal(7,2)"),
            ("sr_return_ship_cost", "decimal(7,2)"),
            ("sr_refunded_cash", "decimal(7,2)"),
            ("sr_reversed_charge", "decimal(7,2)"),
            ("sr_store_credit", "decimal(7,2)"),
            ("sr_net_loss", "decimal(7,2)"),
        ],
        primary_key: &["sr_item_sk", "sr_ticket_number"],
    },
    TableDef {
        name: "store_sales",
        columns: &[
            ("ss_sold_date_sk", "integer"),
            ("ss_sold_time_sk", "integer"),
            ("ss_item_sk", "integer"),
            ("ss_customer_sk", "integer"),
            ("ss_cdemo_sk", "integer"),
            ("ss_hdemo_sk", "integer"),
            ("ss_addr_sk", "integer"),
            ("ss_store_sk", "integer"),
            ("ss_promo_sk", "integer"),
            ("ss_ticket_number", "integer"),
            ("ss_quantity", "integer"),
            ("ss_wholesale_cost", "decimal(7,2)"),
            ("ss_list_price", "decimal(7,2)"),
            ("ss_sales_price", "decimal(7,2)"),
            ("ss_ext_discount_amt", "decimal(7,2)"),
            ("ss_ext_sales_price", "decimal(7,2)"),
            ("ss_ext_wholesale_cost", "decimal(7,2)"),
            ("ss_ext_list_price", "decimal(7,2)"),
            ("ss_ext_tax", "decimal(7,2)"),
            ("ss_coupon_amt", "decimal(7,2)"),
            ("ss_net_paid", "decimal(7,2)"),
            ("ss_net_paid_inc_tax", "decimal(7,2)"),
            ("ss_net_profit", "decimal(7,2)"),
        ],
        primary_key: &["ss_item_sk", "ss_ticket_number"],
    },
    TableDef {
        name: "time_dim",
        columns: &[
            ("t_time_sk", "integer"),
            ("t_time_id", "char(16)"),
            ("t_time", "integer"),
            ("t_hour", "integer"),
            ("t_minute", "integer"),
            ("t_second", "integer"),
            ("t_am_pm", "char(2)"),
            ("t_shift", "char(20)"),
            ("t_sub_shift", "char(20)"),
            ("t_meal_time", "char(20)"),
        ],
        primary_key: &["t_time_sk"],
    },
    TableDef {
        name: "warehouse",
        columns: &[
            ("w_warehouse_sk", "integer"),
            ("w_warehouse_id", "char(16)"),
            ("w_warehouse_name", "varchar(20)"),
            ("w_warehouse_sq_ft", "integer"),
            ("w_street_number", "char(10)"),
            ("w_street_name", "varchar(60)"),
            ("w_street_type", "char(15)"),
            ("w_suite_number", "char(10)"),
            ("w_city", "varchar(60)"),
            ("w_county", "varchar(30)"),
            ("w_state", "char(2)"),
            ("w_zip", "char(10)"),
            ("w_country", "varchar(20)"),
            ("w_gmt_offset", "decimal(5,2)"),
        ],
        primary_key: &["w_warehouse_sk"],
    },
    TableDef {
        name: "web_page",
        columns: &[
            ("wp_web_page_sk", "integer"),
            ("wp_web_page_id", "char(16)"),
            ("wp_rec_start_date", "date"),
            ("wp_rec_end_date", "date"),
            ("wp_creation_date_sk", "integer"),
            ("wp_access_date_sk", "integer"),
            ("wp_autogen_flag", "char(1)"),
            ("wp_customer_sk", "integer"),
            ("wp_url", "varchar(100)"),
            ("wp_type", "char(50)"),
            ("wp_char_count", "integer"),
            ("wp_link_count", "integer"),
            ("wp_image_count", "integer"),
        ],
        primary_key: &["wp_web_page_sk"],
    },
    TableDef {
        name: "web_returns",
        columns: &[
            ("wr_returned_date_sk", "integer"),
            ("wr_returned_time_sk", "integer"),
            ("wr_item_sk", "integer"),
            ("wr_refunded_customer_sk", "integer"),
            ("wr_refunded_cdemo_sk", "integer"),
            ("wr_refunded_hdemo_sk", "integer"),
            ("wr_refunded_addr_sk", "integer"),
            ("wr_returning_customer_sk", "integer"),
            ("wr_returning_cdemo_sk", "integer"),
            ("wr_returning_hdemo_sk", "integer"),
            ("wr_returning_addr_sk", "integer"),
            ("wr_web_page_sk", "integer"),
            ("wr_reason_sk", "integer"),
            ("wr_order_number", "integer"),
            ("wr_return_quantity", "integer"),
            ("wr_return_amt", "decimal(7,2)"),
            ("wr_return_tax", "decimal(7,2)"),
            ("wr_return_amt_inc_tax", "decimal(7,2)"),
            ("wr_fee", "decimal(7,2)"),
            ("wr_return_ship_cost", "decimal(7,2)"),
            ("wr_refunded_cash", "decimal(7,2)"),
            ("wr_reversed_charge", "decimal(7,2)"),
            ("wr_account_credit", "decimal(7,2)"),
            ("wr_net_loss", "decimal(7,2)"),
        ],
        primary_key: &["wr_item_sk", "wr_order_number"],
    },
    TableDef {
        name: "web_sales",
        columns: &[
            ("ws_sold_date_sk", "integer"),
            ("ws_sold_time_sk", "integer"),
            ("ws_ship_date_sk", "integer"),
            ("ws_item_sk", "integer"),
            ("ws_bill_customer_sk", "integer"),
            ("ws_bill_cdemo_sk", "integer"),
            ("ws_bill_hdemo_sk", "integer"),
            ("ws_bill_addr_sk", "integer"),
            ("ws_ship_customer_sk", "integer"),
            ("ws_ship_cdemo_sk", "integer"),
            ("ws_ship_hdemo_sk", "integer"),
            ("ws_ship_addr_sk", "integer"),
            ("ws_web_page_sk", "integer"),
            ("ws_web_site_sk", "integer"),
            ("ws_ship_mode_sk", "integer"),
            ("ws_warehouse_sk", "integer"),
            ("ws_promo_sk", "integer"),
            ("ws_order_number", "integer"),
            ("ws_quantity", "integer"),
            ("ws_wholesale_cost", "decimal(7,2)"),
            ("ws_list_price", "decimal(7,2)"),
            ("ws_sales_price", "decimal(7,2)"),
            ("ws_ext_discount_amt", "decimal(7,2)"),
            ("ws_ext_sales_price", "decimal(7,2)"),
            ("ws_ext_wholesale_cost", "decimal(7,2)"),
            ("ws_ext_list_price", "decimal(7,2)"),
            ("ws_ext_tax", "decimal(7,2)"),
            ("ws_coupon_amt", "decimal(7,2)"),
            ("ws_ext_ship_cost", "decimal(7,2)"),
            ("ws_net_paid", "decimal(7,2)"),
            ("ws_net_paid_inc_tax", "decimal(7,2)"),
            ("ws_net_paid_inc_ship", "decimal(7,2)"),
            ("ws_net_paid_inc_ship_tax", "decimal(7,2)"),
            ("ws_net_profit", "decimal(7,2)"),
        ],
        primary_key: &["ws_item_sk", "ws_order_number"],
    },
    TableDef {
        name: "web_site",
        columns: &[
            ("web_site_sk", "integer"),
            ("web_site_id", "char(16)"),
            ("web_rec_start_date", "date"),
            ("web_rec_end_date", "date"),
            ("web_name", "varchar(50)"),
            ("web_open_date_sk", "integer"),
            ("web_close_date_sk", "integer"),
            ("web_class", "varchar(50)"),
            ("web_manager", "varchar(40)"),
            ("web_mkt_id", "integer"),
            ("web_mkt_class", "varchar(50)"),
            ("web_mkt_desc", "varchar(100)"),
            ("web_market_manager", "varchar(40)"),
            ("web_company_id", "integer"),
            ("web_company_name", "char(50)"),
            ("web_street_number", "char(10)"),
            ("web_street_name", "varchar(60)"),
            ("web_street_type", "char(15)"),
            ("web_suite_number", "char(10)"),
            ("web_city", "varchar(60)"),
            ("web_county", "varchar(30)"),
            ("web_state", "char(2)"),
            ("web_zip", "char(10)"),
            ("web_country", "varchar(20)"),
            ("web_gmt_offset", "decimal(5,2)"),
            ("web_tax_percentage", "decimal(5,2)"),
        ],
        primary_key: &["web_site_sk"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generic_columns() {
        assert_eq!(
            generic_column_definitions(3),
            "YCSB_KEY VARCHAR PRIMARY KEY, FIELD0 TEXT, FIELD1 TEXT, FIELD2 TEXT"
        );
        assert_eq!(generic_column_definitions(0), "YCSB_KEY VARCHAR PRIMARY KEY");

        for field_count in [1, 10, 57] {
            let columns = generic_column_definitions(field_count);
            let names = columns
                .split(", ")
                .map(|c| c.split(' ').next().unwrap())
                .collect::<Vec<_>>();
            assert_eq!(names.len(), field_count as usize + 1);
            assert_eq!(names[0], KEY_COLUMN);
            for (idx, name) in names[1..].iter().enumerate() {
                assert_eq!(*name, format!("FIELD{idx}"));
            }
        }
    }

    #[test]
    fn test_statements() {
        assert_eq!(drop_table_sql("usertable"), "DROP TABLE IF EXISTS usertable;");
        assert_eq!(
            create_table_sql("usertable", &generic_column_definitions(1)),
            "CREATE TABLE usertable (YCSB_KEY VARCHAR PRIMARY KEY, FIELD0 TEXT);"
        );
    }

    #[test]
    fn test_tpc_ds_tables_sorted_and_unique() {
        assert_eq!(TPC_DS_TABLES.len(), 24);
        assert!(TPC_DS_TABLES.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_tpc_ds_tables_well_formed() {
        for table in TPC_DS_TABLES {
            let mut names = HashSet::new();
            for (name, ty) in table.columns {
                assert!(names.insert(*name), "duplicate column {name} in {}", table.name);
                assert!(!ty.is_empty() && !ty.contains(['+', ' ']), "bad type {ty:?}");
            }
            assert!(!table.primary_key.is_empty(), "{} has no primary key", table.name);
            for key in table.primary_key {
                assert!(names.contains(key), "{key} is not a column of {}", table.name);
            }
        }
    }

    #[test]
    fn test_tpc_ds_column_definitions() {
        let store_sales = find_tpc_ds_table("store_sales").unwrap();
        let defs = store_sales.column_definitions();
        assert!(defs.starts_with("ss_sold_date_sk integer, ss_sold_time_sk integer, "));
        assert!(defs.ends_with("ss_net_profit decimal(7,2), PRIMARY KEY (ss_item_sk, ss_ticket_number)"));

        let item = find_tpc_ds_table("item").unwrap();
        assert_eq!(item.columns.len(), 22);
        assert_eq!(item.columns.last(), Some(&("i_product_name", "char(50)")));
        assert!(!item.column_definitions().contains('+'));

        let inventory = find_tpc_ds_table("inventory").unwrap();
        assert_eq!(
            create_table_sql(inventory.name, &inventory.column_definitions()),
            "CREATE TABLE inventory (inv_date_sk integer, inv_item_sk integer, \
             inv_warehouse_sk integer, inv_quantity_on_hand integer, \
             PRIMARY KEY (inv_date_sk, inv_item_sk, inv_warehouse_sk));"
        );

        assert!(find_tpc_ds_table("usertable").is_none());
    }
}

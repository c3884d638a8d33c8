use chimp3::domain::contact::Contact;
use chimp3::domain::customer::{Customer, CustomerList};
use chimp3::domain::line_item::LineItem;
use chimp3::errors::ApiError;
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn test_customer_decodes_from_response_body() {
    let body = json!({
        "id": "cust_1",
        "email_address": "alice@example.com",
        "opt_in_status": true,
        "orders_count": 3,
        "total_spent": 120.5,
        "address": {
            "address1": "1 Main St",
            "city": "Atlanta",
            "country_code": "US",
            "longitude": -84.39,
            "latitude": 33.75
        },
        "created_at": "2015-07-15T19:28:00+00:00",
        "_links": [
            {
                "re": "self",
                "href": "https://usX.api.mailchimp.com/3.0/ecommerce/stores/s1/customers/cust_1",
                "method": "GET",
                "targetSchema": "https://usX.api.mailchimp.com/schema/3.0/Customers/Instance.json",
                "schema": ""
            }
        ]
    });

    let customer: Customer = serde_json::from_value(body).unwrap();
    assert_eq!(customer.id, "cust_1");
    assert_eq!(customer.email_address.as_deref(), Some("alice@example.com"));
    assert_eq!(customer.opt_in_status, Some(true));
    assert_eq!(customer.orders_count, Some(3));
    assert_eq!(customer.total_spent, Some(120.5));
    assert_eq!(
        customer.created_at,
        Some(Utc.with_ymd_and_hms(2015, 7, 15, 19, 28, 0).unwrap())
    );
    assert!(customer.updated_at.is_none());

    let address = customer.address.unwrap();
    assert_eq!(address.address1, "1 Main St");
    assert_eq!(address.country_code, "US");
    assert_eq!(address.postal_code, "");

    assert_eq!(customer.links.len(), 1);
    assert_eq!(customer.links[0].rel, "self");
    assert_eq!(customer.links[0].method, "GET");
    assert!(customer.links[0].target_schema.ends_with("Instance.json"));
}

#[test]
fn test_customer_write_body_skips_unset_fields() {
    let customer = Customer {
        id: "cust_2".to_string(),
        email_address: Some("bob@example.com".to_string()),
        ..Customer::default()
    };

    let body = serde_json::to_value(&customer).unwrap();
    assert_eq!(
        body,
        json!({"id": "cust_2", "email_address": "bob@example.com"})
    );
}

#[test]
fn test_customer_list_flattens_pagination_meta() {
    let body = json!({
        "store_id": "store_1",
        "customers": [
            {"id": "cust_1"},
            {"id": "cust_2"}
        ],
        "total_items": 42,
        "_links": [
            {"re": "self", "href": "https://usX.api.mailchimp.com/3.0/ecommerce/stores/store_1/customers", "method": "GET"}
        ]
    });

    let list: CustomerList = serde_json::from_value(body).unwrap();
    assert_eq!(list.store_id, "store_1");
    assert_eq!(list.customers.len(), 2);
    assert_eq!(list.meta.total_items, 42);
    assert_eq!(list.meta.links[0].rel, "self");
}

#[test]
fn test_contact_uses_phone_wire_name() {
    let contact: Contact = serde_json::from_value(json!({
        "company": "Freddie's Jokes",
        "address1": "675 Ponce de Leon Ave NE",
        "city": "Atlanta",
        "state": "GA",
        "zip": "30308",
        "country": "US",
        "phone": "8675309"
    }))
    .unwrap();
    assert_eq!(contact.phone_number, "8675309");
    assert_eq!(contact.address2, "");

    let body = serde_json::to_value(&contact).unwrap();
    assert_eq!(body["phone"], "8675309");
}

#[test]
fn test_line_item_optional_titles() {
    let item: LineItem = serde_json::from_value(json!({
        "id": "line_1",
        "product_id": "prod_1",
        "product_variant_id": "var_1",
        "quantity": 2,
        "price": 9.99
    }))
    .unwrap();
    assert_eq!(item.quantity, 2);
    assert!(item.product_title.is_none());

    let body = serde_json::to_value(&item).unwrap();
    assert!(body.get("product_title").is_none());
}

#[test]
fn test_error_envelope_decodes_with_field_errors() {
    let envelope: ApiError = serde_json::from_value(json!({
        "type": "https://mailchimp.com/developer/marketing/docs/errors/",
        "title": "Invalid Resource",
        "status": 400,
        "detail": "The resource submitted could not be validated.",
        "instance": "abc-123",
        "ref_no": "ref-42",
        "errors": [
            {"field": "email_address", "message": "must be a valid email"}
        ]
    }))
    .unwrap();

    assert!(envelope.has_error());
    assert_eq!(envelope.status, 400);
    assert_eq!(envelope.reference_number, "ref-42");
    assert_eq!(envelope.errors.len(), 1);
    assert_eq!(envelope.errors[0].field, "email_address");
}

#[test]
fn test_successful_body_probes_as_no_error() {
    let envelope: ApiError = serde_json::from_value(json!({
        "type": "",
        "status": 200
    }))
    .unwrap();
    assert!(!envelope.has_error());

    // A resource body with none of the envelope keys decodes the same way.
    let envelope: ApiError = serde_json::from_value(json!({"id": "cust_1"})).unwrap();
    assert!(!envelope.has_error());
}

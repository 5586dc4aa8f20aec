use contact_browser::{
    ArraySource,
    ContactDetail,
    ContactIndex,
};

#[test]
fn test_call_from_detail() {
    let index = ContactIndex::new(Box::new(ArraySource::new(crate::dummy_contacts())), Some("Andrea"));
    let contact = index.contact_at(0, 0).unwrap();
    let detail = ContactDetail::from(contact);
    assert_eq!(detail.row_count(), 2);

    let request = detail.dial_request(1).unwrap();
    assert_eq!(request.title(), "Call Andrea Owens");
    assert_eq!(request.url().unwrap().as_str(), "tel://3723822719");
    assert_eq!(detail.dial_request(2).is_none(), true);
}

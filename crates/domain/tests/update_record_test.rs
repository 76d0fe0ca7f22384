use ferrous_dyndns_domain::{DnsMessage, Opcode, Question, RecordClass, RecordType, UpdateData};

mod helpers;
use helpers::UpdateRecordBuilder;

#[test]
fn test_any_class_with_empty_data_is_delete_all() {
    let record = UpdateRecordBuilder::new().delete_all(RecordType::A).build();
    assert!(record.is_delete_all());
}

#[test]
fn test_any_class_with_data_is_not_delete_all() {
    let record = UpdateRecordBuilder::new().class(RecordClass::ANY).build();
    assert!(!record.is_delete_all());
}

#[test]
fn test_none_class_with_empty_data_is_not_delete_all() {
    let mut record = UpdateRecordBuilder::new().delete_all(RecordType::A).build();
    record.class = RecordClass::NONE;
    assert!(!record.is_delete_all());
}

#[test]
fn test_plain_addition_is_not_delete_all() {
    let record = UpdateRecordBuilder::new().address("2001:db8::1").build();
    assert!(!record.is_delete_all());
    assert_eq!(record.record_type, RecordType::AAAA);
    assert!(matches!(record.data, UpdateData::Address(_)));
}

#[test]
fn test_message_constructors() {
    let query = DnsMessage::query(vec![Question::new("host.example.com.", RecordType::A)]);
    assert_eq!(query.opcode, Opcode::Query);
    assert!(query.authority.is_empty());

    let update = DnsMessage::update(
        Question::new("example.com.", RecordType::SOA),
        vec![UpdateRecordBuilder::new().build()],
    );
    assert_eq!(update.opcode, Opcode::Update);
    assert_eq!(update.questions.len(), 1);
    assert_eq!(update.authority.len(), 1);
}

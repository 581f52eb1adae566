use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use tracing::{error, instrument};

use super::QuizStore;
use crate::error::StoreError;
use crate::model::QuizRecord;

/// Partition key attribute of the quiz table.
pub const QUIZ_ID_ATTRIBUTE: &str = "quizId";

#[derive(Clone, Debug)]
pub struct DynamoQuizStore {
    client: Client,
    table_name: String,
}

impl DynamoQuizStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self { client, table_name: table_name.into() }
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig, table_name: impl Into<String>) -> Self {
        Self::new(Client::new(sdk_config), table_name)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn string_list(values: &[String]) -> AttributeValue {
    AttributeValue::L(values.iter().cloned().map(AttributeValue::S).collect())
}

/// DynamoDB item for `record`. Absent optional fields get no attribute at all.
pub fn to_item(record: &QuizRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert(QUIZ_ID_ATTRIBUTE.to_string(), AttributeValue::S(record.id.clone()));
    item.insert("noteIds".to_string(), string_list(&record.note_ids));

    let optional = [
        ("question", &record.question),
        ("answer", &record.answer),
        ("explanation", &record.explanation),
        ("intent", &record.intent),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            item.insert(name.to_string(), AttributeValue::S(value.clone()));
        }
    }
    if let Some(choices) = &record.choices {
        item.insert("choices".to_string(), string_list(choices));
    }
    item
}

#[async_trait]
impl QuizStore for DynamoQuizStore {
    #[instrument(skip(self, record), fields(table = %self.table_name, quiz_id = %record.id))]
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(error = %message, "DynamoDB PutItem failed");
                StoreError::Write { id: record.id.clone(), message }
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(choices: Option<Vec<String>>) -> QuizRecord {
        QuizRecord {
            id: "q-1".into(),
            note_ids: vec!["n1".into(), "n2".into()],
            question: Some("Q".into()),
            answer: Some("A".into()),
            explanation: None,
            intent: Some("I".into()),
            choices,
        }
    }

    #[test]
    fn item_keys_by_quiz_id_and_lists_note_ids() {
        let item = to_item(&record(None));
        assert_eq!(item[QUIZ_ID_ATTRIBUTE], AttributeValue::S("q-1".into()));
        assert_eq!(
            item["noteIds"],
            AttributeValue::L(vec![AttributeValue::S("n1".into()), AttributeValue::S("n2".into())])
        );
    }

    #[test]
    fn item_omits_absent_fields() {
        let item = to_item(&record(None));
        assert!(!item.contains_key("choices"));
        assert!(!item.contains_key("explanation"));
        assert_eq!(item.len(), 5);
    }

    #[test]
    fn item_includes_choices_when_present() {
        let item = to_item(&record(Some(vec!["True".into(), "False".into()])));
        assert_eq!(
            item["choices"],
            AttributeValue::L(vec![AttributeValue::S("True".into()), AttributeValue::S("False".into())])
        );
    }
}

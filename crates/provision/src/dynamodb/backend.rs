//! Table creation against DynamoDB (Imperative Shell).

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use tally_core::planning::{AttributeType, KeyAttribute, TablePlan, TableSchema, Throughput};
use tally_core::storage::{CreateOutcome, Result, TableBackend};

use super::error::{map_build_error, map_create_table_error};

/// Creates provisioned-throughput tables in DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoDbTableBackend {
    client: Client,
}

impl DynamoDbTableBackend {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableBackend for DynamoDbTableBackend {
    async fn create_table(&self, plan: &TablePlan) -> Result<CreateOutcome> {
        let request = self
            .client
            .create_table()
            .table_name(&plan.table_name)
            .set_key_schema(Some(key_schema(&plan.schema)?))
            .set_attribute_definitions(Some(attribute_definitions(&plan.schema)?))
            .billing_mode(BillingMode::Provisioned)
            .provisioned_throughput(provisioned_throughput(&plan.throughput)?);

        match request.send().await {
            Ok(_) => Ok(CreateOutcome::Created),
            Err(err) => map_create_table_error(err),
        }
    }
}

fn key_schema(schema: &TableSchema) -> Result<Vec<KeySchemaElement>> {
    Ok(vec![
        key_element(&schema.hash_key, KeyType::Hash)?,
        key_element(&schema.range_key, KeyType::Range)?,
    ])
}

fn key_element(key: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&key.name)
        .key_type(key_type)
        .build()
        .map_err(map_build_error)
}

fn attribute_definitions(schema: &TableSchema) -> Result<Vec<AttributeDefinition>> {
    [&schema.hash_key, &schema.range_key]
        .into_iter()
        .map(|key| {
            AttributeDefinition::builder()
                .attribute_name(&key.name)
                .attribute_type(to_scalar_type(&key.attribute_type))
                .build()
                .map_err(map_build_error)
        })
        .collect()
}

fn provisioned_throughput(throughput: &Throughput) -> Result<ProvisionedThroughput> {
    ProvisionedThroughput::builder()
        .read_capacity_units(throughput.read)
        .write_capacity_units(throughput.write)
        .build()
        .map_err(map_build_error)
}

fn to_scalar_type(attr_type: &AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
        AttributeType::Number => ScalarAttributeType::N,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_schema() {
        let elements = key_schema(&TableSchema::bucketed()).unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].attribute_name(), "key");
        assert_eq!(elements[0].key_type(), &KeyType::Hash);
        assert_eq!(elements[1].attribute_name(), "timestamp");
        assert_eq!(elements[1].key_type(), &KeyType::Range);
    }

    #[test]
    fn test_attribute_definitions() {
        let definitions = attribute_definitions(&TableSchema::bucketed()).unwrap();

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].attribute_name(), "key");
        assert_eq!(definitions[0].attribute_type(), &ScalarAttributeType::S);
        assert_eq!(definitions[1].attribute_name(), "timestamp");
        assert_eq!(definitions[1].attribute_type(), &ScalarAttributeType::N);
    }

    #[test]
    fn test_provisioned_throughput() {
        let throughput = provisioned_throughput(&Throughput { read: 20, write: 90 }).unwrap();

        assert_eq!(throughput.read_capacity_units(), 20);
        assert_eq!(throughput.write_capacity_units(), 90);
    }
}

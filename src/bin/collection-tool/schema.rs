use anyhow::{bail, Result};
use serde_json::{json, Map, Value};

use content_collections::{collections, Collection};

use crate::SchemaArgs;

fn describe(collection: &Collection) -> Value {
    json!({
        "type": collection.kind(),
        "schema": collection.schema().describe(),
    })
}

pub fn schema_cmd(args: SchemaArgs) -> Result<()> {
    let described = match args.collection {
        Some(name) => match collections().get(&name) {
            Some(collection) => describe(collection),
            None => bail!("Unknown collection {}. Known: {}", name, collections().names().collect::<Vec<_>>().join(", ")),
        },
        None => {
            let all: Map<String, Value> = collections().iter()
                .map(|(name, collection)| (name.to_string(), describe(collection)))
                .collect();
            Value::Object(all)
        }
    };

    println!("{}", serde_json::to_string_pretty(&described)?);
    Ok(())
}

//! Generated API documentation.
//!
//! A statically-built OpenAPI 3.0 description of the route surface,
//! served at `/api-docs`. The document is assembled from typed structs so
//! it always serializes to well-formed OpenAPI; it reads nothing from the
//! stores.

use std::collections::BTreeMap;

use serde::Serialize;

/// OpenAPI 3.0 specification document.
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiSpec {
    pub openapi: &'static str,
    pub info: Info,
    pub tags: Vec<Tag>,
    pub paths: BTreeMap<&'static str, PathItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Info {
    pub title: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub summary: &'static str,
    pub tags: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    pub responses: BTreeMap<&'static str, Response>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: &'static str,
    #[serde(rename = "in")]
    pub location: &'static str,
    pub required: bool,
    pub schema: Schema,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBody {
    pub required: bool,
    pub content: BTreeMap<&'static str, MediaType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: Schema,
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<&'static str, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<&'static str>,
}

impl Schema {
    fn of(schema_type: &'static str) -> Self {
        Self {
            schema_type,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    fn object(
        properties: &[(&'static str, &'static str)],
        required: &[&'static str],
    ) -> Self {
        Self {
            schema_type: "object",
            properties: properties
                .iter()
                .map(|(name, ty)| (*name, Schema::of(*ty)))
                .collect(),
            required: required.to_vec(),
        }
    }
}

impl Operation {
    fn new(summary: &'static str, tag: &'static str) -> Self {
        Self {
            summary,
            tags: vec![tag],
            parameters: Vec::new(),
            request_body: None,
            responses: BTreeMap::new(),
        }
    }

    fn id_param(mut self) -> Self {
        self.parameters.push(Parameter {
            name: "id",
            location: "path",
            required: true,
            schema: Schema::of("integer"),
        });
        self
    }

    fn body(mut self, schema: Schema) -> Self {
        self.request_body = Some(RequestBody {
            required: true,
            content: BTreeMap::from([("application/json", MediaType { schema })]),
        });
        self
    }

    fn response(mut self, status: &'static str, description: &'static str) -> Self {
        self.responses.insert(status, Response { description });
        self
    }
}

/// Build the API description for the whole route surface.
pub fn document() -> OpenApiSpec {
    let item_body = || {
        Schema::object(
            &[("name", "string"), ("power", "integer"), ("type", "string")],
            &["name", "power"],
        )
    };
    let character_body = || {
        Schema::object(
            &[("name", "string"), ("class", "string"), ("level", "integer")],
            &["name", "class", "level"],
        )
    };
    let item_id_body = || Schema::object(&[("itemId", "integer")], &["itemId"]);

    let mut paths: BTreeMap<&'static str, PathItem> = BTreeMap::new();

    paths.insert(
        "/itens",
        PathItem {
            get: Some(
                Operation::new("List all magic items", "Items").response("200", "List of items"),
            ),
            post: Some(
                Operation::new("Create a magic item", "Items")
                    .body(item_body())
                    .response("201", "Item created")
                    .response("400", "Missing required fields"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/itens/{id}",
        PathItem {
            get: Some(
                Operation::new("Get a magic item by ID", "Items")
                    .id_param()
                    .response("200", "Item found")
                    .response("404", "Item not found"),
            ),
            put: Some(
                Operation::new("Update a magic item by ID", "Items")
                    .id_param()
                    .body(item_body())
                    .response("200", "Item updated")
                    .response("404", "Item not found"),
            ),
            delete: Some(
                Operation::new("Delete a magic item by ID", "Items")
                    .id_param()
                    .response("200", "Item removed")
                    .response("404", "Item not found"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/personagens",
        PathItem {
            get: Some(
                Operation::new("List all characters", "Characters")
                    .response("200", "List of characters"),
            ),
            post: Some(
                Operation::new("Create a character", "Characters")
                    .body(character_body())
                    .response("201", "Character created")
                    .response("400", "Missing required fields"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/personagens/{id}",
        PathItem {
            get: Some(
                Operation::new("Get a character by ID", "Characters")
                    .id_param()
                    .response("200", "Character found")
                    .response("404", "Character not found"),
            ),
            put: Some(
                Operation::new("Update a character by ID", "Characters")
                    .id_param()
                    .body(character_body())
                    .response("200", "Character updated")
                    .response("404", "Character not found"),
            ),
            delete: Some(
                Operation::new("Delete a character by ID", "Characters")
                    .id_param()
                    .response("200", "Character removed")
                    .response("404", "Character not found"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/personagens/{id}/atribuir-item",
        PathItem {
            post: Some(
                Operation::new("Assign a magic item to a character", "Characters")
                    .id_param()
                    .body(item_id_body())
                    .response("200", "Item assigned")
                    .response("404", "Character or item not found"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/personagens/{id}/remover-item",
        PathItem {
            post: Some(
                Operation::new("Remove a magic item from a character", "Characters")
                    .id_param()
                    .body(item_id_body())
                    .response("200", "Item removed")
                    .response("404", "Character or item not found"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/personagens/{id}/itens",
        PathItem {
            get: Some(
                Operation::new("List a character's magic items", "Characters")
                    .id_param()
                    .response("200", "List of the character's items")
                    .response("404", "Character not found"),
            ),
            ..Default::default()
        },
    );
    paths.insert(
        "/personagens/{id}/amuleto",
        PathItem {
            get: Some(
                Operation::new("Find a character's first amulet", "Characters")
                    .id_param()
                    .response("200", "Amulet found")
                    .response("404", "Character or amulet not found"),
            ),
            ..Default::default()
        },
    );

    OpenApiSpec {
        openapi: "3.0.0",
        info: Info {
            title: "Grimoire - RPG Characters & Magic Items",
            version: "1.0.0",
            description: "API for managing characters and magic items",
        },
        tags: vec![
            Tag {
                name: "Characters",
                description: "Character management routes",
            },
            Tag {
                name: "Items",
                description: "Magic item management routes",
            },
        ],
        paths,
    }
}

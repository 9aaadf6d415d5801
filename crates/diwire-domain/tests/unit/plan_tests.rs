//! Unit tests for the plan artifact

use diwire_domain::value_objects::{
    Binding, Cardinality, ModulePlan, Plan, PlannedToken, Token, TokenId, TokenOrigin,
    TypeMetadata,
};

fn planned(name: &str, metadata: TypeMetadata) -> PlannedToken {
    PlannedToken {
        token: Token::new(name, "Token", Cardinality::Single),
        origin: TokenOrigin::Implicit,
        metadata,
    }
}

#[test]
fn test_plan_lookups() {
    let plan = Plan {
        tokens: vec![
            planned("V", TypeMetadata::default()),
            planned(
                "U",
                TypeMetadata {
                    implements: vec![TokenId::from("HToken")],
                    generics: vec![TokenId::from("VToken")],
                },
            ),
        ],
        modules: vec![ModulePlan {
            name: "default".to_string(),
            bindings: vec![Binding {
                token: TokenId::from("UToken"),
                factory: "createU".to_string(),
            }],
        }],
        ..Plan::default()
    };

    assert_eq!(plan.position("VToken"), Some(0));
    assert_eq!(plan.position("UToken"), Some(1));
    assert!(plan.token("missing").is_none());
    assert_eq!(plan.binding_count(), 1);
    assert!(plan.module("default").is_some());
}

#[test]
fn test_planned_token_flattens_metadata() {
    let token = planned(
        "U",
        TypeMetadata {
            implements: vec![TokenId::from("HToken")],
            generics: vec![],
        },
    );
    let json = serde_json::to_value(&token).expect("serialization should succeed");

    assert_eq!(json["id"], "UToken");
    assert_eq!(json["implements"][0], "HToken");
    assert!(json.get("generics").is_none());
    assert_eq!(json["origin"], "implicit");
}

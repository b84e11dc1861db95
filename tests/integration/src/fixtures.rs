//! Test fixtures and payload builders
//!
//! Shapes follow the Clash of Clans and Notion API responses, trimmed to
//! the fields the sync reads plus a few it must ignore.

use serde_json::{json, Value};

/// Clan response carrying the given `(tag, name)` members
pub fn clan(members: &[(&str, &str)]) -> Value {
    let member_list: Vec<Value> = members
        .iter()
        .enumerate()
        .map(|(i, (tag, name))| {
            json!({
                "tag": tag,
                "name": name,
                "role": "member",
                "expLevel": 100,
                "clanRank": i + 1
            })
        })
        .collect();

    json!({
        "tag": "#2PP",
        "name": "Les Barbares",
        "members": members.len(),
        "memberList": member_list
    })
}

/// Clan response without a `memberList` key
pub fn clan_without_members() -> Value {
    json!({"tag": "#2PP", "name": "Les Barbares", "members": 0})
}

/// Database page; `tag = None` leaves the id column empty
pub fn page(id: &str, tag: Option<&str>, name: &str) -> Value {
    let rich_text = match tag {
        Some(tag) => json!([{
            "type": "text",
            "plain_text": tag,
            "text": {"content": tag, "link": null}
        }]),
        None => json!([]),
    };

    json!({
        "object": "page",
        "id": id,
        "archived": false,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{
                    "type": "text",
                    "plain_text": name,
                    "text": {"content": name, "link": null}
                }]
            },
            "id": {"id": "a1", "type": "rich_text", "rich_text": rich_text},
            "Tags": {"id": "a2", "type": "multi_select", "multi_select": []},
            "JDC": {"id": "a3", "type": "select", "select": null}
        }
    })
}

/// Page with a status and tags set
pub fn page_with_details(id: &str, tag: &str, name: &str, tags: &[&str], status: &str) -> Value {
    let mut value = page(id, Some(tag), name);
    value["properties"]["Tags"]["multi_select"] =
        tags.iter().map(|t| json!({"name": t, "color": "blue"})).collect();
    value["properties"]["JDC"]["select"] = json!({"name": status, "color": "green"});
    value
}

/// Database query response
pub fn query(pages: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "results": pages,
        "next_cursor": null,
        "has_more": false
    })
}

/// Expected body of a page creation request
pub fn create_body(database_id: &str, tag: &str, name: &str) -> Value {
    json!({
        "parent": {"database_id": database_id},
        "properties": {
            "Name": {"title": [{"text": {"content": name}}]},
            "id": {"rich_text": [{"text": {"content": tag}}]}
        }
    })
}

//! 扁平参数表到层级参数表的转换。
//!
//! 请求参数表常以带`.`的键表达层级关系，例如：
//!
//! ```text
//! { "name": "Sam", "role.code": "admin", "role.parent.name": "Li" }
//! ```
//!
//! 转换后：
//!
//! ```text
//! { "name": "Sam", "role": { "code": "admin", "parent": { "name": "Li" } } }
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::reflect::Value;

/// 将带点号键的扁平参数表转换为层级结构。
///
/// 普通键直接保留；单元素列表解开为其元素，空列表退化为`Null`；
/// 带点号的键按首个点号分组后递归转换。同名的普通子映射会与
/// 点号组深度合并。
pub fn inheritable_params(flat_params: &HashMap<String, Value>) -> BTreeMap<String, Value> {
    if flat_params.is_empty() {
        return BTreeMap::new();
    }
    convert(flat_params)
}

fn convert(flat_params: &HashMap<String, Value>) -> BTreeMap<String, Value> {
    let mut groups: HashMap<String, HashMap<String, Value>> = HashMap::new();
    let mut output = BTreeMap::new();

    for (key, value) in flat_params {
        match key.find('.').filter(|&i| i > 0) {
            Some(dot) => {
                // 带点号的键：按前缀分组，剩余部分留待递归处理
                groups
                    .entry(key[..dot].to_string())
                    .or_default()
                    .insert(key[dot + 1..].to_string(), value.clone());
            }
            None => {
                output.insert(key.clone(), scalarize(value));
            }
        }
    }

    for (prefix, group) in groups {
        let nested = convert(&group);
        match output.get_mut(&prefix) {
            // 已存在同名子映射时深度合并
            Some(Value::Map(existing)) => existing.extend(nested),
            _ => {
                output.insert(prefix, Value::Map(nested));
            }
        }
    }

    output
}

// 列表参数的退化规则：空列表视为缺失，单元素列表解开为该元素
fn scalarize(value: &Value) -> Value {
    match value {
        Value::List(items) if items.is_empty() => Value::Null,
        Value::List(items) if items.len() == 1 => items[0].clone(),
        other => other.clone(),
    }
}

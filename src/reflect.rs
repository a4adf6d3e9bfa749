// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 动态属性访问模块
//!
//! 该模块是工具库的核心组件，为任意类型提供按名称的动态属性读写能力，
//! 而无需在编译期知晓目标的具体类型。它涵盖了：
//! 1. 类型元数据的描述（字段表、访问器表、祖先链）。
//! 2. 元数据的记忆化缓存（首次查询后O(1)）。
//! 3. 按命名约定派生访问器并调用（`get`/`set`/`nested_get`/`to_map`）。
//!
//! ## 设计意图
//! - **显式注册**：每个可描述类型持有一个静态的[`TypeDescriptor`]，
//!   列出字段与访问器。访问器是普通函数指针，内部向下转型到具体类型，
//!   不依赖任何运行期反射机制。
//! - **元数据继承**：描述符通过`parent`构成祖先链。祖先贡献字段元数据
//!   以及可被子类型同名条目遮蔽的访问器条目；字段枚举的顺序约定为
//!   "最派生类型的成员在前"。
//! - **可注入的注册表**：所有缓存都属于一个[`MetaRegistry`]实例，
//!   而非真正的进程级全局状态。进程级的缺省注册表通过[`global`]获得，
//!   测试可以构造私有注册表实现隔离，也可以选择有界的LRU缓存模式。
//! - **软失败约定**：`get`/`set`在访问器缺失时记录日志并静默跳过
//!   （宽松模式），这与`find_field`/`find_method`返回`None`但不记录
//!   日志的行为是有意为之的不对称。严格模式下缺失则作为错误抛出。

use std::any::Any;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::{error, warn};

use crate::cache::MetaCache;
use crate::exception::Exception;
use crate::param::{PROPERTY_PATH_SEPARATOR, SETTER_PREFIX};
use crate::strutil;

/// 动态属性值。
///
/// 属性读写统一通过该枚举传递，`type_name`用于setter的参数类型匹配。
/// 嵌套的bean通过`Bean`变体携带，支撑`nested_get`的链式访问。
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Bean(Arc<dyn Reflective>),
}

impl Value {
    /// 值的运行期类型名。bean返回其描述符中注册的类型名。
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Bean(bean) => bean.descriptor().name,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// 判空。`Null`、空字符串、空列表、空映射视为空，其余值非空。
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Str(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// 将一个可描述对象包装为属性值。
    pub fn bean(value: impl Reflective) -> Value {
        Value::Bean(Arc::new(value))
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::Str(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Value::Int(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Value::Float(v) = self {
            Some(*v)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// 将`Bean`变体向下转型为具体类型的引用。
    pub fn as_bean<T: Any>(&self) -> Option<&T> {
        if let Value::Bean(bean) = self {
            bean.as_any().downcast_ref::<T>()
        } else {
            None
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(i) => write!(f, "Int({})", i),
            Value::Float(v) => write!(f, "Float({})", v),
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::List(items) => f.debug_tuple("List").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Bean(bean) => write!(f, "Bean({})", bean.descriptor().name),
        }
    }
}

impl PartialEq for Value {
    /// 结构化相等比较；bean按引用同一性比较。
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Bean(a), Value::Bean(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<Value> for serde_json::Value {
    /// 转换为JSON值，便于与序列化层交互。bean通过`to_map`展开为对象。
    fn from(value: Value) -> serde_json::Value {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Float(v) => serde_json::Number::from_f64(v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Bean(bean) => match global().to_map(bean.as_ref(), &[]) {
                Ok(map) => serde_json::Value::Object(
                    map.into_iter()
                        .map(|(k, v)| (k, serde_json::Value::from(v)))
                        .collect(),
                ),
                Err(e) => {
                    error!("无法将bean转换为JSON对象：{}", e);
                    serde_json::Value::Null
                }
            },
        }
    }
}

/// 可描述类型的能力接口。
///
/// 实现该trait的类型通过静态[`TypeDescriptor`]暴露自身结构，
/// 从而参与按名称的动态属性访问。
pub trait Reflective: Any + Send + Sync {
    /// 该类型的静态描述符。描述符的地址即类型身份。
    fn descriptor(&self) -> &'static TypeDescriptor;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// 类型直接声明的一个字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub name: &'static str,
    pub type_name: &'static str,
}

impl FieldRef {
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self { name, type_name }
    }
}

/// getter访问器的函数体：从目标读取属性值。
pub type GetterFn = fn(&dyn Any) -> Result<Value, Exception>;

/// setter访问器的函数体：向目标写入属性值。
pub type SetterFn = fn(&mut dyn Any, Value) -> Result<(), Exception>;

#[derive(Debug, Clone, Copy)]
enum AccessorBody {
    Getter(GetterFn),
    Setter(SetterFn),
}

/// 一个具名访问器及其精确的参数类型列表。
///
/// getter没有参数；setter恰好有一个参数，其声明类型必须与传入值的
/// 运行期类型名完全相等才会被`set`选中。
#[derive(Debug, Clone, Copy)]
pub struct MethodRef {
    pub name: &'static str,
    pub param_types: &'static [&'static str],
    body: AccessorBody,
}

impl MethodRef {
    /// 声明一个getter访问器。
    pub const fn getter(name: &'static str, body: GetterFn) -> Self {
        Self {
            name,
            param_types: &[],
            body: AccessorBody::Getter(body),
        }
    }

    /// 声明一个setter访问器，`param_types`是其单个参数的类型名。
    pub const fn setter(
        name: &'static str,
        param_types: &'static [&'static str],
        body: SetterFn,
    ) -> Self {
        Self {
            name,
            param_types,
            body: AccessorBody::Setter(body),
        }
    }

    pub fn is_getter(&self) -> bool {
        matches!(self.body, AccessorBody::Getter(_)) && self.param_types.is_empty()
    }

    pub fn is_setter(&self) -> bool {
        matches!(self.body, AccessorBody::Setter(_)) && self.param_types.len() == 1
    }
}

/// 类型的静态描述符：字段表、访问器表以及指向父描述符的链接。
///
/// 每个类型恰好定义一个描述符静态量，其地址被各缓存作为类型身份的键。
/// 类型在运行期不可变，因此缓存条目一旦填充就永不失效。
pub struct TypeDescriptor {
    /// 类型名称，同时作为`Value::Bean`的运行期类型名
    pub name: &'static str,
    /// 父类型描述符。祖先贡献字段元数据和可被遮蔽的访问器条目
    pub parent: Option<&'static TypeDescriptor>,
    /// 该类型直接声明的字段（不含祖先）
    pub fields: &'static [FieldRef],
    /// 该类型直接声明的访问器（不含祖先）
    pub methods: &'static [MethodRef],
    /// 无参构造器，用于`instantiate`
    pub constructor: Option<fn() -> Box<dyn Reflective>>,
}

impl TypeDescriptor {
    /// 缓存键：描述符的地址即类型身份。
    fn key(&'static self) -> usize {
        self as *const TypeDescriptor as usize
    }

    /// 自身及祖先的迭代器，从最派生类型开始。
    pub fn ancestors(&'static self) -> Ancestors {
        Ancestors { next: Some(self) }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .field("methods", &self.methods.len())
            .finish()
    }
}

/// 沿`parent`链接向上遍历描述符链的迭代器。
pub struct Ancestors {
    next: Option<&'static TypeDescriptor>,
}

impl Iterator for Ancestors {
    type Item = &'static TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent;
        Some(current)
    }
}

/// 属性描述符：一个字段与它配对的getter/setter。
#[derive(Debug, Clone, Copy)]
pub struct PropertyRef {
    pub name: &'static str,
    pub getter: Option<&'static MethodRef>,
    pub setter: Option<&'static MethodRef>,
}

/// 访问器函数体内部使用：将目标向下转型为具体类型的引用。
///
/// 目标的实际类型与访问器声明的类型不符属于非法状态，
/// 转换为`Invocation`错误向上抛出。
pub fn downcast_target<'a, T: Any>(target: &'a dyn Any, expected: &str) -> Result<&'a T, Exception> {
    target
        .downcast_ref::<T>()
        .ok_or_else(|| Exception::invocation("accessor", format!("目标对象不是{}类型", expected)))
}

/// [`downcast_target`]的可变版本，供setter使用。
pub fn downcast_target_mut<'a, T: Any>(
    target: &'a mut dyn Any,
    expected: &str,
) -> Result<&'a mut T, Exception> {
    target
        .downcast_mut::<T>()
        .ok_or_else(|| Exception::invocation("accessor", format!("目标对象不是{}类型", expected)))
}

/// 调用getter访问器并返回属性值。
///
/// 访问器内部失败时，展开嵌套的调用错误，重新抛出携带真实原因
/// 描述和访问器名称的`Invocation`错误。把setter传给本函数同样是
/// 非法状态。
pub fn invoke(method: &MethodRef, target: &dyn Reflective) -> Result<Value, Exception> {
    match method.body {
        AccessorBody::Getter(body) => body(target.as_any()).map_err(|e| rewrap(method, e)),
        AccessorBody::Setter(_) => Err(Exception::invocation(
            method.name,
            "该访问器是setter，应当通过invoke_mut携带参数调用",
        )),
    }
}

/// 调用setter访问器，将`value`写入目标。
pub fn invoke_mut(
    method: &MethodRef,
    target: &mut dyn Reflective,
    value: Value,
) -> Result<(), Exception> {
    match method.body {
        AccessorBody::Setter(body) => body(target.as_any_mut(), value).map_err(|e| rewrap(method, e)),
        AccessorBody::Getter(_) => Err(Exception::invocation(
            method.name,
            "该访问器是getter，不接受参数",
        )),
    }
}

// 展开嵌套的调用错误，保留真实原因的描述并补全访问器名称
fn rewrap(method: &MethodRef, cause: Exception) -> Exception {
    let message = match cause {
        Exception::Invocation { message, .. } => message,
        other => other.to_string(),
    };
    Exception::Invocation {
        method: method.name.to_string(),
        message,
    }
}

/// 类型元数据注册表。
///
/// 持有字段、getter、setter与属性描述符四张记忆化缓存表，
/// 键为类型身份（getter/setter额外带declared-only标志）。
/// 缺省为无界并发缓存；`with_capacity`构造LRU有界缓存。
/// 所有查询在首次计算后均为O(1)。
pub struct MetaRegistry {
    fields_cache: MetaCache<usize, Arc<Vec<&'static FieldRef>>>,
    getters_cache: MetaCache<(usize, bool), Arc<Vec<&'static MethodRef>>>,
    setters_cache: MetaCache<(usize, bool), Arc<Vec<&'static MethodRef>>>,
    property_cache: MetaCache<usize, Arc<Vec<PropertyRef>>>,
    strict: bool,
}

impl MetaRegistry {
    /// 构造无界注册表，条目永不淘汰，随观察到的类型单调增长。
    pub fn new() -> Self {
        Self {
            fields_cache: MetaCache::unbounded(),
            getters_cache: MetaCache::unbounded(),
            setters_cache: MetaCache::unbounded(),
            property_cache: MetaCache::unbounded(),
            strict: false,
        }
    }

    /// 构造有界注册表，各缓存表按LRU策略淘汰。容量为0时panic。
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields_cache: MetaCache::from_capacity(capacity),
            getters_cache: MetaCache::from_capacity(capacity),
            setters_cache: MetaCache::from_capacity(capacity),
            property_cache: MetaCache::from_capacity(capacity),
            strict: false,
        }
    }

    /// 开启或关闭严格模式。严格模式下`get`/`set`在访问器缺失时
    /// 返回`NoSuchProperty`错误而非静默跳过。
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 枚举类型及其所有祖先的字段，最派生类型的字段在前。
    ///
    /// 结果被记忆化，重复调用返回共享同一分配的`Arc`。
    pub fn fields(&self, descriptor: &'static TypeDescriptor) -> Arc<Vec<&'static FieldRef>> {
        self.fields_cache.get_or_compute(descriptor.key(), || {
            let mut all = Vec::new();
            for d in descriptor.ancestors() {
                all.extend(d.fields.iter());
            }
            Arc::new(all)
        })
    }

    /// 沿祖先链查找第一个满足条件的字段。
    ///
    /// `name`与`type_name`至少给出其一，否则返回`InvalidArgument`；
    /// 给出的条件必须全部精确匹配。未找到返回`Ok(None)`，不记录日志。
    pub fn find_field(
        &self,
        descriptor: &'static TypeDescriptor,
        name: Option<&str>,
        type_name: Option<&str>,
    ) -> Result<Option<&'static FieldRef>, Exception> {
        if name.is_none() && type_name.is_none() {
            return Err(Exception::invalid("查找字段时必须给出名称或类型之一"));
        }
        for d in descriptor.ancestors() {
            for field in d.fields {
                let name_matches = name.map_or(true, |n| n == field.name);
                let type_matches = type_name.map_or(true, |t| t == field.type_name);
                if name_matches && type_matches {
                    return Ok(Some(field));
                }
            }
        }
        Ok(None)
    }

    /// 类型直接声明的访问器表。表本身是静态数据，无需额外缓存。
    pub fn declared_methods(&self, descriptor: &'static TypeDescriptor) -> &'static [MethodRef] {
        descriptor.methods
    }

    /// 沿祖先链查找访问器，名称与参数类型列表都必须精确匹配。
    ///
    /// `param_types`为`None`时关闭参数过滤，只按名称匹配。
    /// 最派生类型的条目优先，实现子类型对祖先条目的遮蔽。
    pub fn find_method(
        &self,
        descriptor: &'static TypeDescriptor,
        name: &str,
        param_types: Option<&[&str]>,
    ) -> Option<&'static MethodRef> {
        for d in descriptor.ancestors() {
            for method in d.methods {
                if method.name != name {
                    continue;
                }
                match param_types {
                    Some(expected) => {
                        if method.param_types == expected {
                            return Some(method);
                        }
                    }
                    None => return Some(method),
                }
            }
        }
        None
    }

    /// 类型的getter列表。`declared_only`控制是否包含祖先的条目；
    /// 结果按(类型身份, declared-only标志)缓存。
    pub fn getters(
        &self,
        descriptor: &'static TypeDescriptor,
        declared_only: bool,
    ) -> Arc<Vec<&'static MethodRef>> {
        self.getters_cache
            .get_or_compute((descriptor.key(), declared_only), || {
                Arc::new(collect_accessors(
                    descriptor,
                    declared_only,
                    MethodRef::is_getter,
                ))
            })
    }

    /// 类型的setter列表，缓存方式与[`Self::getters`]相同。
    pub fn setters(
        &self,
        descriptor: &'static TypeDescriptor,
        declared_only: bool,
    ) -> Arc<Vec<&'static MethodRef>> {
        self.setters_cache
            .get_or_compute((descriptor.key(), declared_only), || {
                Arc::new(collect_accessors(
                    descriptor,
                    declared_only,
                    MethodRef::is_setter,
                ))
            })
    }

    /// 按属性名读取属性值。
    ///
    /// 属性名会被规范化为snake_case（camelCase输入等价），按此名称
    /// 查找零参数getter并调用。getter缺失时记录错误日志并返回
    /// `Ok(None)`；严格模式下返回`NoSuchProperty`。这一软失败约定是
    /// 有意与`set`对称、与`find_method`不对称的。
    pub fn get(&self, target: &dyn Reflective, property: &str) -> Result<Option<Value>, Exception> {
        if strutil::is_blank(property) {
            return Err(Exception::invalid("属性名不能为空白"));
        }
        let descriptor = target.descriptor();
        let getter_name = strutil::to_snake_case(property);
        match self.find_method(descriptor, &getter_name, Some(&[])) {
            Some(method) => invoke(method, target).map(Some),
            None => {
                if self.strict {
                    Err(Exception::NoSuchProperty {
                        type_name: descriptor.name.to_string(),
                        property: property.to_string(),
                    })
                } else {
                    error!("未找到getter方法：{}#{}", descriptor.name, getter_name);
                    Ok(None)
                }
            }
        }
    }

    /// 按属性名写入属性值。
    ///
    /// setter名称为`set_` + 规范化后的属性名，且其声明的参数类型必须
    /// 与`value`的运行期类型名相等。setter缺失时记录日志后什么也不做
    /// （严格模式下返回`NoSuchProperty`）。
    pub fn set(
        &self,
        target: &mut dyn Reflective,
        property: &str,
        value: Value,
    ) -> Result<(), Exception> {
        if strutil::is_blank(property) {
            return Err(Exception::invalid("属性名不能为空白"));
        }
        let descriptor = target.descriptor();
        let setter_name = format!("{}{}", SETTER_PREFIX, strutil::to_snake_case(property));
        let value_type = value.type_name();
        match self.find_method(descriptor, &setter_name, Some(&[value_type])) {
            Some(method) => invoke_mut(method, target, value),
            None => {
                if self.strict {
                    Err(Exception::NoSuchProperty {
                        type_name: descriptor.name.to_string(),
                        property: property.to_string(),
                    })
                } else {
                    error!(
                        "未找到setter方法：{}#{}({})",
                        descriptor.name, setter_name, value_type
                    );
                    Ok(())
                }
            }
        }
    }

    /// 连续调用多个getter，例如`role.id`相当于先取`role`再取`id`。
    ///
    /// 路径为空白时返回`InvalidArgument`。链路中任何一段的值缺失
    /// 或不是bean，后续访问都无法继续，返回`InvalidArgument`并指明
    /// 中断的段。
    pub fn nested_get(
        &self,
        target: &dyn Reflective,
        path: &str,
    ) -> Result<Option<Value>, Exception> {
        if strutil::is_blank(path) {
            return Err(Exception::invalid("属性路径不能为空白"));
        }
        let mut current: Option<Value> = None;
        for (i, segment) in path.split(PROPERTY_PATH_SEPARATOR).enumerate() {
            if strutil::is_blank(segment) {
                return Err(Exception::invalid(format!("属性路径{}包含空白段", path)));
            }
            current = if i == 0 {
                self.get(target, segment)?
            } else {
                match current {
                    Some(Value::Bean(bean)) => self.get(bean.as_ref(), segment)?,
                    Some(other) => {
                        return Err(Exception::invalid(format!(
                            "路径段{}之前的值不是bean，而是{}",
                            segment,
                            other.type_name()
                        )));
                    }
                    None => {
                        return Err(Exception::invalid(format!(
                            "路径段{}之前的值缺失，访问链中断",
                            segment
                        )));
                    }
                }
            };
        }
        Ok(current)
    }

    /// 将bean转换为属性名到属性值的映射。
    ///
    /// 未给出属性名时调用全部getter（含祖先，遮蔽去重），只保留
    /// 非`Null`的结果；给出属性名时逐个通过[`Self::get`]解析，
    /// 同样只保留非`Null`的结果。
    pub fn to_map(
        &self,
        target: &dyn Reflective,
        property_names: &[&str],
    ) -> Result<BTreeMap<String, Value>, Exception> {
        let mut map = BTreeMap::new();
        if property_names.is_empty() {
            let getters = self.getters(target.descriptor(), false);
            for method in getters.iter() {
                let value = invoke(method, target)?;
                if !value.is_null() {
                    map.insert(method.name.to_string(), value);
                }
            }
        } else {
            for name in property_names {
                if let Some(value) = self.get(target, name)? {
                    if !value.is_null() {
                        map.insert((*name).to_string(), value);
                    }
                }
            }
        }
        Ok(map)
    }

    /// 类型的属性描述符表：`fields`中的每个字段配对其getter/setter。
    ///
    /// 两个访问器都找不到的字段被跳过并记录警告，不作为错误抛出。
    /// 结果按类型身份缓存。
    pub fn property_descriptors(
        &self,
        descriptor: &'static TypeDescriptor,
    ) -> Arc<Vec<PropertyRef>> {
        self.property_cache.get_or_compute(descriptor.key(), || {
            let mut properties = Vec::new();
            for field in self.fields(descriptor).iter() {
                let getter = self
                    .find_method(descriptor, field.name, Some(&[]))
                    .filter(|m| m.is_getter());
                let setter_name = format!("{}{}", SETTER_PREFIX, field.name);
                let setter = self
                    .find_method(descriptor, &setter_name, None)
                    .filter(|m| m.is_setter());
                if getter.is_none() && setter.is_none() {
                    warn!("类型{}的字段{}没有任何访问器，跳过", descriptor.name, field.name);
                    continue;
                }
                properties.push(PropertyRef {
                    name: field.name,
                    getter,
                    setter,
                });
            }
            Arc::new(properties)
        })
    }

    /// 通过注册的无参构造器创建实例。
    ///
    /// 类型没有注册构造器（例如抽象的基类描述符）时返回
    /// `InvalidArgument`。
    pub fn instantiate(
        &self,
        descriptor: &'static TypeDescriptor,
    ) -> Result<Box<dyn Reflective>, Exception> {
        match descriptor.constructor {
            Some(constructor) => Ok(constructor()),
            None => Err(Exception::invalid(format!(
                "类型{}没有注册无参构造器",
                descriptor.name
            ))),
        }
    }
}

impl Default for MetaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// 按遮蔽规则收集访问器：最派生类型在前，同名条目只保留首个
fn collect_accessors(
    descriptor: &'static TypeDescriptor,
    declared_only: bool,
    predicate: fn(&MethodRef) -> bool,
) -> Vec<&'static MethodRef> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut push_from = |d: &'static TypeDescriptor| {
        for method in d.methods {
            if predicate(method) && seen.insert(method.name) {
                out.push(method);
            }
        }
    };
    if declared_only {
        push_from(descriptor);
    } else {
        for d in descriptor.ancestors() {
            push_from(d);
        }
    }
    out
}

lazy_static! {
    static ref GLOBAL_REGISTRY: MetaRegistry = MetaRegistry::new();
}

/// 进程级的缺省注册表（无界、宽松模式）。
pub fn global() -> &'static MetaRegistry {
    &GLOBAL_REGISTRY
}

/// [`MetaRegistry::fields`]的全局便捷形式。
pub fn fields(descriptor: &'static TypeDescriptor) -> Arc<Vec<&'static FieldRef>> {
    global().fields(descriptor)
}

/// [`MetaRegistry::find_field`]的全局便捷形式。
pub fn find_field(
    descriptor: &'static TypeDescriptor,
    name: Option<&str>,
    type_name: Option<&str>,
) -> Result<Option<&'static FieldRef>, Exception> {
    global().find_field(descriptor, name, type_name)
}

/// [`MetaRegistry::find_method`]的全局便捷形式。
pub fn find_method(
    descriptor: &'static TypeDescriptor,
    name: &str,
    param_types: Option<&[&str]>,
) -> Option<&'static MethodRef> {
    global().find_method(descriptor, name, param_types)
}

/// [`MetaRegistry::get`]的全局便捷形式。
pub fn get(target: &dyn Reflective, property: &str) -> Result<Option<Value>, Exception> {
    global().get(target, property)
}

/// [`MetaRegistry::set`]的全局便捷形式。
pub fn set(target: &mut dyn Reflective, property: &str, value: Value) -> Result<(), Exception> {
    global().set(target, property, value)
}

/// [`MetaRegistry::nested_get`]的全局便捷形式。
pub fn nested_get(target: &dyn Reflective, path: &str) -> Result<Option<Value>, Exception> {
    global().nested_get(target, path)
}

/// [`MetaRegistry::to_map`]的全局便捷形式。
pub fn to_map(
    target: &dyn Reflective,
    property_names: &[&str],
) -> Result<BTreeMap<String, Value>, Exception> {
    global().to_map(target, property_names)
}

/// [`MetaRegistry::property_descriptors`]的全局便捷形式。
pub fn property_descriptors(descriptor: &'static TypeDescriptor) -> Arc<Vec<PropertyRef>> {
    global().property_descriptors(descriptor)
}

/// [`MetaRegistry::instantiate`]的全局便捷形式。
pub fn instantiate(descriptor: &'static TypeDescriptor) -> Result<Box<dyn Reflective>, Exception> {
    global().instantiate(descriptor)
}

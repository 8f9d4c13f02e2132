//! 参数映射器
//!
//! 按映射表顺序遍历选项，生成有序的参数序列。相同输入总是得到相同输出。

use pact_common::{OptionField, OptionValue, VerifierOptions};
use tracing::{debug, warn};

use crate::arguments::{default_table, ArgMapping, ValueKind};
use crate::error::MappingError;

/// 将选项映射为参数序列
///
/// 未设置的字段跳过。声明式映射只在取值为真时输出
/// （空字符串、false、0、空列表都不输出），这与原有的
/// "只在 truthy 时传参" 行为一致。
///
/// 不支持的字段只要出现就立即失败，取值为空列表也一样。
pub fn map_options(
    options: &VerifierOptions,
    table: &[(OptionField, ArgMapping)],
) -> Result<Vec<String>, MappingError> {
    let mut args = Vec::new();

    for (field, mapping) in table {
        let value = match options.value(*field) {
            Some(value) => value,
            None => continue,
        };

        match mapping {
            ArgMapping::Flag { arg, kind } => {
                if let OptionValue::Selectors(_) = value {
                    return Err(MappingError::UnsupportedFeature(format!(
                        "{} cannot be passed as a command line value",
                        field
                    )));
                }
                if !value.is_truthy() {
                    debug!("选项 {} 为假值，跳过", field);
                    continue;
                }
                match kind {
                    ValueKind::String => {
                        args.push(arg.to_string());
                        args.push(value.to_arg());
                    }
                    ValueKind::Flag => args.push(arg.to_string()),
                    ValueKind::Join => {
                        args.push(arg.to_string());
                        args.push(value.to_list().join(","));
                    }
                }
            }
            ArgMapping::Function(map) => args.extend(map(&value)?),
            ArgMapping::Warning(message) => warn!("{}", message),
            ArgMapping::Unsupported(message) => {
                return Err(MappingError::UnsupportedFeature(message.to_string()));
            }
        }
    }

    Ok(args)
}

/// 参数映射器
#[derive(Debug, Clone)]
pub struct ArgumentMapper {
    table: Vec<(OptionField, ArgMapping)>,
}

impl Default for ArgumentMapper {
    fn default() -> Self {
        Self::new(default_table())
    }
}

impl ArgumentMapper {
    /// 使用自定义映射表创建映射器
    pub fn new(table: Vec<(OptionField, ArgMapping)>) -> Self {
        Self { table }
    }

    /// 映射选项
    pub fn map(&self, options: &VerifierOptions) -> Result<Vec<String>, MappingError> {
        map_options(options, &self.table)
    }

    /// 当前映射表
    pub fn table(&self) -> &[(OptionField, ArgMapping)] {
        &self.table
    }
}

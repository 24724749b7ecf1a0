//! 設定ファイルの行解析
//!
//! フォーマット: 1行に `key = value`、`#` で始まる行はコメント
//! 例: "quality = 12"

use log::warn;

use crate::core::config::ConfigError;

/// 解析された1行
#[derive(Debug, Clone, PartialEq)]
pub struct KvLine<'a> {
    /// 1始まりの行番号
    pub line: usize,
    pub key: &'a str,
    pub value: &'a str,
}

/// テキスト全体を (キー, 値) の列に分解します
///
/// 空行とコメント行は読み飛ばします。`=` で最初に区切り、キーと値の
/// 前後の空白を取り除きます。値は空でも構いません。
///
/// # エラー
///
/// `=` を含まない行、またはキーが空の行があると `ConfigError::Syntax` を返します。
pub fn parse_kv_text(text: &str) -> Result<Vec<KvLine<'_>>, ConfigError> {
    let mut pairs = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            warn!("{} 行目に '=' がありません: '{}'", index + 1, trimmed);
            return Err(ConfigError::Syntax {
                line: index + 1,
                content: trimmed.to_string(),
            });
        };

        let key = key.trim();
        if key.is_empty() {
            warn!("{} 行目のキーが空です: '{}'", index + 1, trimmed);
            return Err(ConfigError::Syntax {
                line: index + 1,
                content: trimmed.to_string(),
            });
        }

        pairs.push(KvLine {
            line: index + 1,
            key,
            value: value.trim(),
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_lines() {
        let text = "# comment\ninterval = 30000\n\n  quality=12  \n";
        let pairs = parse_kv_text(text).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], KvLine { line: 2, key: "interval", value: "30000" });
        assert_eq!(pairs[1], KvLine { line: 4, key: "quality", value: "12" });
    }

    #[test]
    fn test_value_may_contain_equals_and_spaces() {
        let pairs = parse_kv_text("special_effect = red tint\nx = a=b").unwrap();
        assert_eq!(pairs[0].value, "red tint");
        assert_eq!(pairs[1].value, "a=b");
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let pairs = parse_kv_text("timezone =").unwrap();
        assert_eq!(pairs[0].key, "timezone");
        assert_eq!(pairs[0].value, "");
    }

    #[test]
    fn test_missing_separator_reports_line() {
        let result = parse_kv_text("quality = 12\nvflip\n");
        match result {
            Err(ConfigError::Syntax { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "vflip");
            }
            other => panic!("Expected Syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_key_is_syntax_error() {
        assert!(matches!(
            parse_kv_text(" = 5"),
            Err(ConfigError::Syntax { line: 1, .. })
        ));
    }

    #[test]
    fn test_crlf_line_endings() {
        let pairs = parse_kv_text("awb = 1\r\nagc = 0\r\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].value, "0");
    }
}

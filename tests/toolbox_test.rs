//! 各辅助模块协同工作的集成测试。

use std::collections::HashMap;

use chrono::{Duration, TimeZone, Utc};

use toolbox::config::UtilConfig;
use toolbox::param::{self, ETAG, IF_MODIFIED_SINCE, IF_NONE_MATCH, LAST_MODIFIED};
use toolbox::reflect::Value;
use toolbox::webutil::{self, Headers};
use toolbox::{chinese, dateutil, qrencode, randutil, strutil, validation};

#[cfg(test)]
mod toolbox_tests {
    use super::*;

    /// 条件请求的完整协商：服务端写出校验器标头，客户端原样带回，
    /// 第二次请求按未修改处理
    #[test]
    fn test_conditional_request_negotiation() {
        let modified_at = Utc.timestamp_opt(1700000000, 0).unwrap();
        let etag = "\"v42\"";

        // 第一次响应：写出Last-Modified、ETag与缓存策略
        let mut response = Headers::new();
        webutil::set_last_modified(&mut response, modified_at);
        webutil::set_etag(&mut response, etag);
        webutil::set_expires(&mut response, 600);

        // 客户端把校验器原样带回
        let mut second_request = Headers::new();
        second_request.set(IF_MODIFIED_SINCE, response.get(LAST_MODIFIED).unwrap());
        second_request.set(IF_NONE_MATCH, response.get(ETAG).unwrap());

        let mut second_response = Headers::new();
        assert!(!webutil::check_if_modified_since(
            &second_request,
            modified_at
        ));
        assert!(!webutil::check_if_none_match(
            &second_request,
            &mut second_response,
            etag
        ));
        assert_eq!(second_response.get(ETAG), Some(etag));

        // 内容随后被修改，协商失败，需要重新发送实体
        let touched = modified_at + Duration::seconds(5);
        assert!(webutil::check_if_modified_since(&second_request, touched));
    }

    /// 下载响应的标头组合：MIME推断加下载对话框
    #[test]
    fn test_download_response_headers() {
        let file_name = "月度报表.pdf";
        let mut response = Headers::new();

        response.set("Content-Type", param::content_type("pdf"));
        webutil::set_file_download(&mut response, file_name);
        webutil::set_no_cache(&mut response);

        assert_eq!(response.get("content-type"), Some("application/pdf"));
        assert!(response
            .get("Content-Disposition")
            .unwrap()
            .contains(file_name));
        assert_eq!(
            response.get("Cache-Control"),
            Some("no-cache, no-store, max-age=0")
        );
    }

    /// 随机生成的号码与地址通过对应的格式校验
    #[test]
    fn test_random_strings_pass_validation() {
        let mobile = format!("138{}", randutil::next_number(8));
        assert!(validation::is_valid_mobile(&mobile));
        assert!(validation::TelecomProvider::Mobile.matches(&mobile));

        let email = format!("{}@example.com", randutil::next_lower(8));
        assert!(validation::is_valid_email(&email));

        // 长度校验依赖strutil的空白判断
        assert!(strutil::is_not_blank(&randutil::next_string(1)));
    }

    /// 日期解析、截断与再格式化的配合
    #[test]
    fn test_date_parse_and_format_pipeline() {
        let parsed = dateutil::parse_date("2024/03/05").unwrap();
        let truncated = dateutil::truncate_to_day(parsed);
        assert_eq!(parsed, truncated);

        let formatted = truncated.format("%Y-%m-%d").to_string();
        assert_eq!(formatted, "2024-03-05");
        // 重新解析等于原值
        assert_eq!(dateutil::parse_date(&formatted).unwrap(), truncated);
    }

    /// JSON请求识别与参数层级化的配合
    #[test]
    fn test_json_request_with_nested_params() {
        let mut headers = Headers::new();
        headers.set("Accept", "application/x-json;charset=UTF-8");
        let mut params = HashMap::new();
        params.insert("model.name".to_string(), Value::from("sam"));

        assert!(webutil::is_json_request(&headers, &params));

        let nested = toolbox::valuemap::inheritable_params(&params);
        match nested.get("model") {
            Some(Value::Map(model)) => {
                assert_eq!(model.get("name"), Some(&Value::from("sam")));
            }
            other => panic!("model应当是子映射，而不是{:?}", other),
        }
    }

    /// 汉字转拼音的结果可用于生成URL友好的标识
    #[test]
    fn test_pinyin_slug_generation() {
        let title = "北京 Expo";
        let slug = strutil::to_snake_case(&chinese::to_pinyin(title));

        assert_eq!(slug, "beijing_expo");
        assert_eq!(chinese::pinyin_initials("北京"), "BJ");
    }

    /// 二维码生成遵从配置的几何参数
    #[test]
    fn test_qrcode_with_configured_size() {
        let config = UtilConfig::new();
        let bytes = qrencode::encode_to_bytes("https://example.com", &config).unwrap();

        // PNG魔数
        assert_eq!(&bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
        assert!(bytes.len() > 100);
    }
}

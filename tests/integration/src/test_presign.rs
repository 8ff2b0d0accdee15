//! End-to-end tests for the `/presigned-url` endpoint.

#[cfg(test)]
mod tests {
    use crate::{
        TEST_BUCKET, gateway_url, query_param, recompute_get_signature, spawn_gateway,
    };

    async fn fetch_pair(query: &str) -> (String, String) {
        let addr = spawn_gateway().await;
        let response = reqwest::get(gateway_url(addr, &format!("/presigned-url?{query}")))
            .await
            .expect("request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("json body");
        let get_url = body["get-url"].as_str().expect("get-url").to_owned();
        let put_url = body["put-url"].as_str().expect("put-url").to_owned();
        (get_url, put_url)
    }

    #[tokio::test]
    async fn test_should_issue_pair_with_defaults() {
        let (get_url, put_url) = fetch_pair("key=tmp/test").await;

        for url in [&get_url, &put_url] {
            assert!(url.starts_with(&format!("https://s3.example.net/{TEST_BUCKET}/tmp/test?")));
            assert_eq!(query_param(url, "X-Amz-Expires").as_deref(), Some("3600"));
            assert_eq!(
                query_param(url, "X-Amz-Algorithm").as_deref(),
                Some("AWS4-HMAC-SHA256")
            );
            assert!(query_param(url, "X-Amz-Signature").is_some());
        }
    }

    #[tokio::test]
    async fn test_should_honor_expire_for_both_urls() {
        let (get_url, put_url) = fetch_pair("key=k&expire=600").await;
        assert_eq!(query_param(&get_url, "X-Amz-Expires").as_deref(), Some("600"));
        assert_eq!(query_param(&put_url, "X-Amz-Expires").as_deref(), Some("600"));
    }

    #[tokio::test]
    async fn test_should_reject_missing_key_with_empty_400() {
        let addr = spawn_gateway().await;
        for query in ["", "?expire=600", "?content-length=100&no-wait=5"] {
            let response = reqwest::get(gateway_url(addr, &format!("/presigned-url{query}")))
                .await
                .expect("request");
            assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
            assert!(response.text().await.expect("body").is_empty());
        }
    }

    #[tokio::test]
    async fn test_should_reject_out_of_range_content_length() {
        let addr = spawn_gateway().await;
        for raw in ["0", "-1", "1073741825"] {
            let response = reqwest::get(gateway_url(
                addr,
                &format!("/presigned-url?key=k&content-length={raw}&max-requests=5"),
            ))
            .await
            .expect("request");
            assert_eq!(
                response.status(),
                reqwest::StatusCode::BAD_REQUEST,
                "content-length={raw}"
            );
            assert!(response.text().await.expect("body").is_empty());
        }
    }

    #[tokio::test]
    async fn test_should_clamp_no_wait_in_signed_query() {
        let (get_url, _) = fetch_pair("key=k&no-wait=15").await;
        assert_eq!(query_param(&get_url, "no-wait").as_deref(), Some("10"));
    }

    #[tokio::test]
    async fn test_should_cover_hints_with_signature() {
        let (get_url, _) = fetch_pair("key=k&max-requests=5&limit-rate=1048576").await;

        assert_eq!(
            query_param(&get_url, "x-bitiful-max-requests").as_deref(),
            Some("5")
        );
        assert_eq!(
            query_param(&get_url, "x-bitiful-limit-rate").as_deref(),
            Some("1048576")
        );

        // The URL verifies against its own query...
        let embedded = query_param(&get_url, "X-Amz-Signature").expect("signature");
        assert_eq!(recompute_get_signature(&get_url), embedded);

        // ...and stops verifying once a signed hint is mutated.
        let tampered = get_url.replace("x-bitiful-max-requests=5", "x-bitiful-max-requests=99");
        assert_ne!(recompute_get_signature(&tampered), embedded);
    }

    #[tokio::test]
    async fn test_should_force_download_only_when_requested() {
        let (get_url, put_url) = fetch_pair("key=k&force-download=true").await;
        assert_eq!(
            query_param(&get_url, "response-content-disposition").as_deref(),
            Some("attachment")
        );
        assert!(query_param(&put_url, "response-content-disposition").is_none());

        let (get_url, _) = fetch_pair("key=k").await;
        assert!(query_param(&get_url, "response-content-disposition").is_none());

        let (get_url, _) = fetch_pair("key=k&force-download=false").await;
        assert!(query_param(&get_url, "response-content-disposition").is_none());
    }

    #[tokio::test]
    async fn test_should_constrain_put_only_when_content_length_present() {
        let (_, put_url) = fetch_pair("key=k&content-length=231703").await;
        assert_eq!(
            query_param(&put_url, "X-Amz-SignedHeaders").as_deref(),
            Some("content-length%3Bhost")
        );

        let (_, put_url) = fetch_pair("key=k").await;
        assert_eq!(
            query_param(&put_url, "X-Amz-SignedHeaders").as_deref(),
            Some("host")
        );
    }

    #[tokio::test]
    async fn test_should_keep_hints_off_the_put_url() {
        let (_, put_url) =
            fetch_pair("key=k&no-wait=5&max-requests=2&limit-rate=100&force-download=1").await;
        for hint in [
            "no-wait",
            "x-bitiful-max-requests",
            "x-bitiful-limit-rate",
            "response-content-disposition",
        ] {
            assert!(query_param(&put_url, hint).is_none(), "hint {hint}");
        }
    }

    #[tokio::test]
    async fn test_should_issue_independently_valid_urls_for_identical_requests() {
        let addr = spawn_gateway().await;
        let url = gateway_url(addr, "/presigned-url?key=tmp/test&max-requests=3");

        let mut get_urls = Vec::new();
        for _ in 0..2 {
            let body: serde_json::Value = reqwest::get(&url)
                .await
                .expect("request")
                .json()
                .await
                .expect("json body");
            get_urls.push(body["get-url"].as_str().expect("get-url").to_owned());
        }

        // Same path and object key...
        let path = |u: &str| u.split_once('?').map(|(p, _)| p.to_owned()).expect("path");
        assert_eq!(path(&get_urls[0]), path(&get_urls[1]));

        // ...and each URL independently verifies against its own query.
        for url in &get_urls {
            let embedded = query_param(url, "X-Amz-Signature").expect("signature");
            assert_eq!(recompute_get_signature(url), embedded);
        }
    }
}

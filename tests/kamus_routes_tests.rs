mod helpers;

use std::collections::HashMap;

use crate::helpers::seed_kamus;

test_with_server!(get_list_empty, |server, ctx_state| {
    let response = server.get("/getlist").await;

    response.assert_status_success();
    let dictionary = response.json::<HashMap<String, String>>();
    assert!(dictionary.is_empty());
});

test_with_server!(get_list_returns_seeded_entries, |server, ctx_state| {
    seed_kamus(&ctx_state, &[("gak", "tidak"), ("yg", "yang")]).await;

    let response = server.get("/getlist").await;

    response.assert_status_success();
    let dictionary = response.json::<HashMap<String, String>>();
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.get("gak"), Some(&"tidak".to_string()));
    assert_eq!(dictionary.get("yg"), Some(&"yang".to_string()));
});

test_with_server!(get_list_last_write_wins_on_duplicates, |server,
                                                           ctx_state| {
    seed_kamus(&ctx_state, &[("gak", "tidak")]).await;
    seed_kamus(&ctx_state, &[("gak", "enggak")]).await;

    let response = server.get("/getlist").await;

    response.assert_status_success();
    let dictionary = response.json::<HashMap<String, String>>();
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get("gak"), Some(&"enggak".to_string()));
});

test_with_server!(health_check_returns_version, |server, ctx_state| {
    let response = server.get("/hc").await;

    response.assert_status_success();
    assert_eq!(response.text(), format!("v{}", env!("CARGO_PKG_VERSION")));
});

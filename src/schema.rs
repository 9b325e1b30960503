diesel::table! {
    storage_items (origin, item_key) {
        origin -> Text,
        item_key -> Text,
        item_value -> Text,
    }
}

//! Static translation tables for the supported locales.
//!
//! Both tables carry the same key set. Lookups for unknown keys return the
//! key itself so a missing entry shows up as its identifier instead of
//! breaking the view.

use crate::preferences::Locale;

/// Every key known to the translation tables.
pub const KEYS: &[&str] = &[
    "newPaste",
    "create",
    "creating",
    "syntax",
    "pastePlaceholder",
    "footerRights",
    "devBy",
    "pasteNotFound",
    "raw",
    "copy",
    "copied",
    "created",
    "expires",
    "bytes",
    "loading",
    "publishFailed",
    "themeLight",
    "themeDark",
];

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "newPaste" => "New",
        "create" => "Publish",
        "creating" => "Wait...",
        "syntax" => "Syntax",
        "pastePlaceholder" => "Type here...",
        "footerRights" => "CodeDrop",
        "devBy" => "by",
        "pasteNotFound" => "Not found",
        "raw" => "Raw",
        "copy" => "Copy",
        "copied" => "Copied",
        "created" => "Created",
        "expires" => "Expires",
        "bytes" => "bytes",
        "loading" => "Loading...",
        "publishFailed" => "Could not publish the paste. Try again.",
        "themeLight" => "Light",
        "themeDark" => "Dark",
        _ => return None,
    })
}

fn russian(key: &str) -> Option<&'static str> {
    Some(match key {
        "newPaste" => "Создать",
        "create" => "Опубликовать",
        "creating" => "Ждите...",
        "syntax" => "Синтаксис",
        "pastePlaceholder" => "Пишите здесь...",
        "footerRights" => "CodeDrop",
        "devBy" => "от",
        "pasteNotFound" => "Не найдено",
        "raw" => "Исходник",
        "copy" => "Копировать",
        "copied" => "Ок",
        "created" => "Создано",
        "expires" => "Истекает",
        "bytes" => "байт",
        "loading" => "Загрузка...",
        "publishFailed" => "Не удалось опубликовать. Попробуйте ещё раз.",
        "themeLight" => "Светлая",
        "themeDark" => "Тёмная",
        _ => return None,
    })
}

/// Look up `key` in `locale`'s table.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    match locale {
        Locale::En => english(key),
        Locale::Ru => russian(key),
    }
}

/// Translate `key`, returning the key itself when the table has no entry.
pub fn translate(locale: Locale, key: &str) -> &str {
    lookup(locale, key).unwrap_or(key)
}

//! Plain-text editor desktop app.

use leptos::*;

const DEFAULT_FILE_NAME: &str = "untitled.txt";
const WELCOME_TEXT: &str = "Welcome to the Text Editor!\n\nStart typing your document here...";

/// Live counts shown in the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

impl DocumentStats {
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.split('\n').count(),
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

#[component]
pub fn EditorApp() -> impl IntoView {
    let file_name = create_rw_signal(DEFAULT_FILE_NAME.to_string());
    let content = create_rw_signal(WELCOME_TEXT.to_string());
    let stats = Signal::derive(move || DocumentStats::of(&content.get()));

    let save = move |_| {
        let name = file_name.get_untracked();
        let name = if name.trim().is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            name
        };
        if let Err(err) = glassdesk_host::download_text_file(&name, &content.get_untracked()) {
            logging::warn!("saving `{name}` failed: {err}");
        }
    };

    view! {
        <div class="app-editor">
            <div class="editor-toolbar">
                <div class="editor-file">
                    <input
                        type="text"
                        aria-label="File name"
                        prop:value=move || file_name.get()
                        on:input=move |ev| file_name.set(event_target_value(&ev))
                    />
                    <button type="button" on:click=save>"Save"</button>
                </div>
                <div class="editor-counts">
                    <span>{move || format!("Lines: {}", stats.get().lines)}</span>
                    <span>{move || format!("Words: {}", stats.get().words)}</span>
                    <span>{move || format!("Characters: {}", stats.get().characters)}</span>
                </div>
            </div>

            <textarea
                class="editor-textarea"
                spellcheck="false"
                placeholder="Start typing..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>

            <div class="editor-statusbar">
                <span>"Plain Text"</span>
                <span>"UTF-8"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_lines_words_and_characters() {
        let stats = DocumentStats::of("hello brave new world\nsecond line");
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.characters, 33);
    }

    #[test]
    fn empty_text_still_has_one_line() {
        let stats = DocumentStats::of("");
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
    }

    #[test]
    fn whitespace_runs_do_not_inflate_word_counts() {
        let stats = DocumentStats::of("  spaced   out  ");
        assert_eq!(stats.words, 2);
    }
}

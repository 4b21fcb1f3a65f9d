use super::{HelpBook, Section, Topic};

pub(crate) fn book() -> HelpBook {
    HelpBook {
        title: "Zettelkasten CLI",
        usage: "zk <command> [options]",
        topics: ALL_TOPICS,
        footer: "Use `zk help <topic>` for focused docs, e.g. `zk help new` or `zk help templates`.",
    }
}

const ALL_TOPICS: &[Topic] = &[
    Topic {
        name: "new",
        summary: "Create an inbox note from a template and link it in today's daily note.",
        usage: "zk new <title> [--template <name>]",
        details: &[
            "Writes <root>/inbox/<title>.md after expanding the template's Templater placeholders.",
            "Titles must be non-empty, at most 80 characters (notes.max_title_length), and must not end in .md.",
            "Titles cannot contain / or \\ or start with a dot; every note lives directly in the inbox.",
            "Fails without writing anything if the note exists or the template contains an unknown command.",
        ],
        options: &[(
            "--template <name>",
            "Template file inside notes.template_dir (default notes.default_template).",
        )],
        aliases: &[],
        section: Section::Command,
        examples: &["zk new my-new-idea", "zk new book-notes --template book.md"],
    },
    Topic {
        name: "day",
        summary: "Create today's daily note if needed and print its path.",
        usage: "zk day",
        details: &[
            "New daily notes start with links to yesterday and tomorrow, followed by the rendered daily template.",
            "Without a daily template a plain `## Journal` heading is used.",
        ],
        options: &[],
        aliases: &["daily"],
        section: Section::Command,
        examples: &["$EDITOR \"$(zk day | tail -n 1)\""],
    },
    Topic {
        name: "week",
        summary: "Create this week's note if needed and print its path.",
        usage: "zk week",
        details: &[
            "Weekly notes are named after the ISO week of this week's Monday, e.g. 2025-W10.md.",
            "They link the previous and next weeks; without a weekly template a `## Weekly Journal` heading is used.",
        ],
        options: &[],
        aliases: &["weekly"],
        section: Section::Command,
        examples: &["zk week"],
    },
    Topic {
        name: "config",
        summary: "Write the default config.toml.",
        usage: "zk config [--force]",
        details: &[
            "Writes to $ZETTELKASTEN_CONFIG, or $XDG_CONFIG_HOME/zettelkasten-cli/config.toml.",
            "Refuses to overwrite an existing file unless --force is given.",
        ],
        options: &[("--force", "Overwrite an existing configuration file.")],
        aliases: &[],
        section: Section::Command,
        examples: &["zk config", "zk config --force"],
    },
    Topic {
        name: "path",
        summary: "Print the Zettelkasten root directory.",
        usage: "zk path",
        details: &["Respects ZETTELKASTEN when set; otherwise general.root from the config."],
        options: &[],
        aliases: &[],
        section: Section::Command,
        examples: &["ZETTELKASTEN=/tmp/zk zk path"],
    },
    Topic {
        name: "help",
        summary: "Show the overview or a specific topic.",
        usage: "zk help [topic]",
        details: &["`zk help` shows the overview; `zk help new` drills into one command."],
        options: &[],
        aliases: &["--help", "-h"],
        section: Section::Command,
        examples: &["zk help templates"],
    },
    Topic {
        name: "templates",
        summary: "Templater placeholders understood when rendering templates.",
        usage: "zk help templates",
        details: &[
            "Placeholders are written <% command %> and replaced in order. Only the exact commands below are known; anything else aborts note creation.",
            "tp.file.title - the note title as typed.",
            "tp.file.creation_date() - today's date as YYYY-MM-DD.",
            "(tp.file.title.charAt(0).toUpperCase()+tp.file.title.slice(1)).split(\"-\").join(\" \") - my-new-idea becomes My New Idea.",
            "tp.file.title.split(\"-\").join(\" \").toUpperCase() - my-new-idea becomes MY NEW IDEA.",
            "fileDate = moment(tp.file.title, 'YYYY-MM-DD').subtract(1, 'd').format('YYYY-MM-DD') - yesterday.",
            "fileDate = moment(tp.file.title, 'YYYY-MM-DD').add(1, 'd').format('YYYY-MM-DD') - tomorrow.",
            "tp.date.now(\"dddd, Do MMMM YYYY\", 0, tp.file.title, \"YYYYMMDD\") - e.g. Friday, the 7th March 2025.",
        ],
        options: &[],
        aliases: &["templater"],
        section: Section::Guide,
        examples: &["# <% tp.file.title %>  (first line of meta/templates/note-template.md)"],
    },
    Topic {
        name: "ZETTELKASTEN",
        summary: "Override the Zettelkasten root (general.root).",
        usage: "ZETTELKASTEN=/path zk new ...",
        details: &["Relative paths from the config resolve against this directory."],
        options: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &["ZETTELKASTEN=~/notes zk day"],
    },
    Topic {
        name: "ZETTELKASTEN_CONFIG",
        summary: "Use a specific config file instead of the XDG location.",
        usage: "ZETTELKASTEN_CONFIG=/path/config.toml zk ...",
        details: &["A missing file means built-in defaults."],
        options: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &["ZETTELKASTEN_CONFIG=./zk.toml zk week"],
    },
    Topic {
        name: "ZK_LOG",
        summary: "Log filter for diagnostics on stderr (default warn).",
        usage: "ZK_LOG=debug zk new ...",
        details: &["Accepts env_logger filters such as debug or zettelkasten_cli=trace."],
        options: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &["ZK_LOG=debug zk day"],
    },
    Topic {
        name: "NO_COLOR",
        summary: "Disable colored output.",
        usage: "NO_COLOR=1 zk new ...",
        details: &[],
        options: &[],
        aliases: &[],
        section: Section::Environment,
        examples: &["NO_COLOR=1 zk day"],
    },
];

use crate::model::{ContentBlock as Block, ContentChapter, DocumentPlan, Language, TableSpec};

use super::{front_matter, screenshot, IMAGE_WIDTH_MM};

pub(super) fn plan() -> DocumentPlan {
    let front = front_matter("Weave your story", "User Manual", "Version 1.1", "Contents");
    DocumentPlan::new(Language::English, "Tramando_Manual_English.pdf", front)
        .with_chapter(introduction())
        .with_chapter(getting_started())
        .with_chapter(markup())
        .with_chapter(interface())
        .with_chapter(structure())
        .with_chapter(aspects())
        .with_chapter(connections())
        .with_chapter(annotations())
        .with_chapter(search())
        .with_chapter(radial_map())
        .with_chapter(export())
        .with_chapter(settings())
        .with_chapter(file_format())
        .with_chapter(shortcuts())
        .with_chapter(appendix())
}

fn introduction() -> ContentChapter {
    ContentChapter::new("introduction", "1. Introduction").with_blocks([
        Block::section("What is Tramando"),
        Block::paragraph(
            "Tramando is a tool designed for writers who need to manage complex stories. \
             Whether you're writing a novel with dozens of characters, a screenplay with \
             multiple narrative threads, or building an imaginary world with its own history \
             and geography, Tramando helps you keep everything under control.",
        ),
        Block::paragraph(
            "Unlike a regular word processor, Tramando doesn't just let you write text. It \
             lets you organize your story into modular blocks called \"chunks\", define \
             characters, places and themes as separate entities, and connect them together to \
             see how they interweave in the narrative.",
        ),
        Block::paragraph(
            "The result is an overview of your work that would be impossible to achieve with \
             traditional tools: you can see in which scenes a character appears, track the \
             development of a theme through chapters, or verify timeline consistency.",
        ),
        Block::section("The Origin of the Name"),
        Block::paragraph(
            "The name \"Tramando\" comes from a play on words in Italian. On one hand there's \
             **trama** (plot), because writing is essentially weaving narrative threads, \
             intertwining stories and destinies. On the other hand there's **tramando** \
             (plotting), which evokes the sense of planning something, perhaps even a crime. \
             As someone said, the difference between a writer and a murderer is thin: the \
             former simply doesn't execute the plan.",
        ),
        Block::section("The Philosophy: Everything is a Chunk"),
        Block::paragraph(
            "In Tramando, the basic unit is the **chunk**: a block of text with a title and its \
             own identity. A chapter is a chunk. A scene is a chunk. But also a character is a \
             chunk, a place is a chunk, even a single note can be a chunk.",
        ),
        Block::paragraph(
            "Chunks can contain other chunks, creating a completely flexible tree structure. \
             There are no rigid rules on how to organize your work: you can have Book > Part > \
             Chapter > Scene, or simply a flat list of scenes. Tramando adapts to your way of \
             thinking and writing, not the other way around.",
        ),
        Block::section("Who is Tramando For"),
        Block::bullets([
            "**Novelists** managing large casts and intertwined plots, who need to track who \
             appears where and when",
            "**Screenwriters** who need to keep track of scenes, characters, and narrative arcs \
             across multiple episodes or acts",
            "**Series authors** who must maintain consistency across volumes, remembering \
             details established in previous books",
            "**Worldbuilders** constructing complex worlds with their own history, geography, \
             and cast of characters",
            "Anyone writing stories with **many interconnected elements** who wants a tool to \
             visualize and manage them",
        ]),
    ])
}

fn getting_started() -> ContentChapter {
    ContentChapter::new("getting-started", "2. Getting Started").with_blocks([
        Block::section("Launching Tramando"),
        Block::paragraph(
            "Tramando is available as a desktop application for Mac, Windows, and Linux. Once \
             installed and launched, you'll be greeted by the welcome screen with three clear \
             options to get started:",
        ),
        Block::bullets([
            "**Continue current work** - Automatically resumes the last project you were \
             working on, exactly where you left off",
            "**New project** - Creates a completely empty project, ready to welcome your new \
             story",
            "**Open file...** - Lets you load an existing .trmd file from your computer",
        ]),
        Block::Spacer(3.0),
        Block::Image(screenshot("splash.png", 130.0, "The Tramando welcome screen")),
        Block::section("Your First Project"),
        Block::paragraph(
            "When you create a new project, Tramando presents a clean and intuitive interface, \
             divided into two main areas. On the left you'll find the **sidebar**, which \
             contains your project structure: here you'll see the tree of your chapters, \
             scenes, and all story elements grow.",
        ),
        Block::paragraph(
            "On the right is the **editor**, the space where you actually write and edit \
             content. The editor includes advanced features like syntax highlighting for \
             markup, line numbers, and the ability to quickly switch from writing mode to \
             reading mode.",
        ),
        Block::section("Saving Your Work"),
        Block::paragraph(
            "Tramando automatically saves your work every few seconds. You can configure the \
             autosave interval in settings, choosing a value between 1 and 10 seconds. This \
             means you'll never lose more than a few seconds of work even in case of a crash or \
             accidental closure.",
        ),
        Block::paragraph(
            "In addition to autosave, you can manually save to a file by clicking the **Save** \
             button in the top bar. The file will have a **.trmd** extension and will be a \
             readable text file, which you can also open with a regular text editor if needed.",
        ),
        Block::note(
            "*Tip: even with autosave active, it's good practice to save to file regularly. \
             This way you'll always have an external backup you can copy to cloud or USB \
             drive.*",
        ),
    ])
}

fn markup() -> ContentChapter {
    ContentChapter::new("markup", "3. What is Markup").with_blocks([
        Block::paragraph(
            "If you've always used programs like Microsoft Word or Google Docs, you may have \
             never heard of \"markup\". Don't worry: it's a simple concept that, once \
             understood, will seem natural and powerful.",
        ),
        Block::section("Visual Formatting vs Markup"),
        Block::paragraph(
            "In Word, when you want to make a word bold, you select it with the mouse and click \
             the B button in the toolbar. This approach is called **visual formatting** or \
             WYSIWYG (What You See Is What You Get): what you see on screen is exactly what \
             you get.",
        ),
        Block::paragraph(
            "With **markup**, instead, you insert special symbols directly into the text. These \
             symbols are then interpreted and transformed into the desired formatting. For \
             example, instead of clicking a button for bold, you write:",
        ),
        Block::code("This word is **important**"),
        Block::paragraph("And the result will be: This word is **important**"),
        Block::section("Why Use Markup?"),
        Block::bullets([
            "**Speed** - You never have to take your hands off the keyboard to search for \
             buttons or menus. You write and format in a continuous flow",
            "**Portability** - Files are pure text, readable on any device and with any program",
            "**Control** - You always see exactly what's in the document, with no hidden \
             formatting or mysterious styles",
            "**Lightness** - Small and fast files, no proprietary format, no risk of corruption",
        ]),
        Block::section("Markdown: The Standard"),
        Block::paragraph(
            "Tramando uses **Markdown**, the most widespread markup language in the world. \
             You'll find it on GitHub, Reddit, Discord, Notion, and hundreds of other \
             platforms. Learning it once will serve you everywhere.",
        ),
        Block::paragraph("Basic Markdown commands:"),
        Block::Table(
            TableSpec::new([
                ["What you want", "What you write", "Result"],
                ["Bold", "**text**", "text in bold"],
                ["Italic", "*text*", "text in italic"],
                ["Title", "# Title", "Large heading"],
                ["Subtitle", "## Subtitle", "Medium heading"],
                ["Bullet list", "- item", "* item"],
                ["Numbered list", "1. item", "1. item"],
            ])
            .with_column_widths_mm([50.0, 40.0, 50.0]),
        ),
        Block::section("Tramando's Special Markup"),
        Block::paragraph(
            "In addition to standard Markdown, Tramando adds its own syntax for specific \
             features:",
        ),
        Block::Table(
            TableSpec::new([
                ["Function", "Syntax", "Example"],
                ["Aspect reference", "[@id]", "[@elena]"],
                ["TODO annotation", "[!TODO:text:priority:comment]", "[!TODO:rewrite:1:too long]"],
                ["NOTE annotation", "[!NOTE:text::comment]", "[!NOTE:verify date::]"],
                ["FIX annotation", "[!FIX:text:priority:]", "[!FIX:name error:2:]"],
                ["Arabic number", "[:ORD]", "1, 2, 3..."],
                ["Roman number", "[:ORD-ROM]", "I, II, III..."],
            ])
            .with_column_widths_mm([45.0, 60.0, 50.0]),
        ),
        Block::section("Don't Worry!"),
        Block::paragraph(
            "Tramando highlights all markup with different colors, making it easy to \
             distinguish special symbols from regular text. Additionally, the **Reading** tab \
             always shows you the final result, without any visible symbols.",
        ),
        Block::note(
            r"*After a few days of use, writing \*\*bold\*\* or [@character] will feel as natural as clicking a button. And you'll be much faster.*",
        ),
    ])
}

fn interface() -> ContentChapter {
    ContentChapter::new("interface", "4. The Interface").with_blocks([
        Block::Image(screenshot("main.png", 160.0, "Tramando's main interface")),
        Block::section("The Top Bar"),
        Block::paragraph("The bar at the top contains all the main application commands:"),
        Block::bullets([
            "**Tramando Logo** - Clicking it returns you to the welcome screen",
            "**Project Title** - Shows the current project name; clicking it lets you edit \
             metadata (title, author, year...)",
            "**Load** - Opens a .trmd file from your computer",
            "**Save** - Downloads the current project as a .trmd file",
            "**Export** - Dropdown menu for exporting to PDF or Markdown",
            "**Annotations Badge** - Shows the total number of annotations; clicking it opens \
             the annotations panel",
            "**Map/Editor Toggle** - Switches between the radial map view and text editor",
            "**Gear Icon** - Opens the settings panel",
        ]),
        Block::section("The Sidebar"),
        Block::paragraph("The left side panel is your project's navigation center:"),
        Block::subsection("Filter Field"),
        Block::paragraph(
            "At the top of the sidebar you'll find a search field that filters the entire \
             project. As you type, you'll see only elements that contain the searched text, \
             both in title and content.",
        ),
        Block::subsection("STRUCTURE"),
        Block::paragraph(
            "This section contains your actual narrative: chapters, scenes, parts. It's \
             organized as an expandable tree. The number in parentheses indicates how many \
             elements it contains.",
        ),
        Block::subsection("ASPECTS"),
        Block::paragraph(
            "Here you'll find the five types of cross-cutting elements, each with its \
             distinctive color: **Characters** (red), **Places** (green), **Themes** (orange), \
             **Sequences** (purple), **Timeline** (blue). The number in parentheses indicates \
             how many scenes each element is used in.",
        ),
        Block::section("The Editor"),
        Block::paragraph("The main area on the right is where writing happens. It includes three tabs:"),
        Block::bullets([
            "**Edit** - The actual editor, with line numbers and syntax highlighting",
            "**Children / Used by** - Shows contained elements (for structure) or scenes that \
             use this element (for aspects)",
            "**Reading** - Clean preview of the text, without visible markup",
        ]),
        Block::paragraph(
            "Above the editor you'll find: the field to edit the title, tags of connected \
             aspects, the \"+ Aspect\" button to add connections, and the \"Parent\" selector \
             to move the element in the hierarchy.",
        ),
    ])
}

fn structure() -> ContentChapter {
    ContentChapter::new("structure", "5. Narrative Structure").with_blocks([
        Block::section("Tree Organization"),
        Block::paragraph(
            "The STRUCTURE section in the sidebar contains your story's text, organized as a \
             hierarchical tree. Each element can contain other elements, allowing you to \
             create whatever structure you prefer.",
        ),
        Block::paragraph(
            "A typical structure might be: **Book** > **Part** > **Chapter** > **Scene**. But \
             there are no fixed rules: you might have only chapters, or scenes without \
             chapters, or a completely different structure. Tramando adapts to you.",
        ),
        Block::section("Creating New Elements"),
        Block::bullets([
            "Click **\"+ New Chunk\"** in the sidebar to create an element at the root level",
            "Click **\"+ Child of [name]\"** to create a nested element inside the selected one",
            "Each chunk automatically receives a unique ID (e.g., cap-1, scene-2)",
            "You can modify the ID to make it more meaningful (e.g., \"prologue\", \"climax\")",
        ]),
        Block::section("Automatic Numbering"),
        Block::paragraph(
            "Tramando supports special macros in the title that are replaced with automatic \
             numbers, based on the element's position among its siblings.",
        ),
        Block::Table(
            TableSpec::new([
                ["Macro", "Result", "Example"],
                ["[:ORD]", "Arabic numbers", "1, 2, 3, 4..."],
                ["[:ORD-ROM]", "Uppercase Roman", "I, II, III, IV..."],
                ["[:ORD-rom]", "Lowercase Roman", "i, ii, iii, iv..."],
                ["[:ORD-ALPHA]", "Uppercase letters", "A, B, C, D..."],
                ["[:ORD-alpha]", "Lowercase letters", "a, b, c, d..."],
            ])
            .with_column_widths_mm([40.0, 50.0, 50.0]),
        ),
        Block::note(
            "If you write \"Chapter [:ORD]: The Awakening\" as the title of the first chapter, \
             it will appear as \"Chapter 1: The Awakening\". The second chapter with \"Chapter \
             [:ORD]: The Departure\" will become \"Chapter 2: The Departure\", and so on.",
        ),
    ])
}

fn aspects() -> ContentChapter {
    ContentChapter::new("aspects", "6. Aspects").with_blocks([
        Block::paragraph(
            "Aspects are elements that cross through the story transversally. They're not part \
             of the linear narrative sequence, but connect to it at various points. Tramando \
             defines five types of aspects, each with a distinctive color.",
        ),
        Block::section("Characters"),
        Block::note("*Color: red (#c44a4a)*"),
        Block::paragraph(
            "Characters are the entities that inhabit your narrative world. Each character can \
             have a profile with their description, and you can create sub-elements to \
             organize information: physical appearance, background, narrative arc, \
             relationships with other characters.",
        ),
        Block::paragraph(
            "By connecting a character to the scenes where they appear, you'll always know \
             where and when they intervene in the story, making consistency checks easier.",
        ),
        Block::section("Places"),
        Block::note("*Color: green (#4a9a6a)*"),
        Block::paragraph(
            "Places are the spaces where things happen. You can organize them hierarchically: \
             a Country contains Cities, which contain Districts, which contain Buildings, which \
             contain Rooms.",
        ),
        Block::paragraph(
            "Each place can have its detailed description, and by connecting it to scenes \
             you'll always know where each moment of the story takes place.",
        ),
        Block::section("Themes"),
        Block::note("*Color: orange (#b87333)*"),
        Block::paragraph(
            "Themes are the recurring ideas and motifs of your story: revenge, redemption, \
             love, betrayal, personal growth. By defining them as aspects and connecting them \
             to relevant scenes, you can track how each theme develops through the narrative.",
        ),
        Block::paragraph(
            "This is particularly useful during revision, when you want to ensure a theme has \
             been adequately developed or hasn't been abandoned mid-story.",
        ),
        Block::section("Sequences"),
        Block::note("*Color: purple (#8a5ac2)*"),
        Block::paragraph(
            "Sequences are cause-and-effect chains that cross through the story. Unlike \
             narrative structure (which follows reading order), sequences follow the internal \
             logic of events.",
        ),
        Block::paragraph(
            "For example, a \"Marco's Revenge\" sequence might have as children: \"Discovery of \
             betrayal\" > \"Planning\" > \"First failed attempt\" > \"Success\" > \
             \"Consequences\". These steps might be scattered across different chapters, but \
             the sequence keeps them connected.",
        ),
        Block::section("Timeline"),
        Block::note("*Color: blue (#4a90c2)*"),
        Block::paragraph(
            "The timeline contains events in actual chronological order, regardless of how \
             they appear in the narrative. It's particularly useful when your story isn't \
             linear: flashbacks, flash-forwards, or parallel narratives.",
        ),
        Block::paragraph(
            "You can use dates or timestamps in event titles (e.g., \"2024-03-15 08:00 - \
             Awakening\") to maintain the correct order.",
        ),
        Block::note(
            "*Tip: use ISO date format (YYYY-MM-DD) in timeline titles for alphabetical \
             sorting that matches chronological order.*",
        ),
        Block::section("Creating Aspects"),
        Block::paragraph(
            "To create a new aspect, click the **\"+ New aspect\"** button in the sidebar, \
             under the desired category. Each aspect will have its own unique ID and you can \
             give it a descriptive title.",
        ),
    ])
}

fn connections() -> ContentChapter {
    ContentChapter::new("connections", "7. Connections").with_blocks([
        Block::paragraph(
            "Tramando's real power lies in the connections between narrative structure and \
             aspects. By connecting scenes to characters, places, and themes, you create a \
             network of relationships that lets you navigate and analyze your story in ways \
             impossible with traditional tools.",
        ),
        Block::section("[@id] Syntax"),
        Block::paragraph(
            "The most direct way to create a connection is to write **[@id]** in the scene's \
             text, where \"id\" is the identifier of the aspect you want to connect.",
        ),
        Block::paragraph(
            "For example, if you have a character with ID \"elena\", writing [@elena] in a \
             scene automatically creates a connection. This method is particularly useful when \
             you want to mark the exact point where an element appears in the text.",
        ),
        Block::section("Tag Method"),
        Block::paragraph("An alternative is to use the visual tags above the editor:"),
        Block::numbered([
            "Select the scene you want to connect",
            "Click the **\"+ Aspect\"** button above the editor",
            "Choose the aspect from the menu that appears",
            "The tag will appear below the scene's title",
        ]),
        Block::paragraph("To remove a connection, click the **x** next to the tag."),
        Block::section("\"Used by\" Tab"),
        Block::paragraph(
            "When you select an aspect (character, place, theme...), the \"Used by\" tab shows \
             you all the scenes that reference it. It's a quick way to answer the question: \
             \"Where does this element appear in the story?\"",
        ),
        Block::section("Count in Sidebar"),
        Block::paragraph(
            "In the sidebar, next to each aspect, you see a number in parentheses (e.g., \
             \"Elena (6)\"). This indicates how many scenes the element is connected to, giving \
             you an immediate idea of its importance in the story.",
        ),
        Block::section("Best Practices"),
        Block::bullets([
            "Use short and meaningful IDs: \"elena\" is better than \"character-001\"",
            "Create connections as you write, not after - it's easier and maintains consistency",
            "Don't overdo it: only connect aspects that are truly relevant to each scene",
            "Use tags for recurring aspects, [@id] in text for specific references",
        ]),
    ])
}

fn annotations() -> ContentChapter {
    ContentChapter::new("annotations", "8. Annotations").with_blocks([
        Block::paragraph(
            "Annotations are notes you leave for yourself during writing. They're visible in \
             Tramando but will never appear in the final exported product. They're your space \
             for notes, reminders, and flags.",
        ),
        Block::section("Annotation Types"),
        Block::bullets([
            "**TODO** - Things to do: \"add location description\", \"develop the dialogue\", \
             \"research historical details\"",
            "**NOTE** - Notes and reflections: \"verify this date\", \"idea for sequel\", \
             \"perhaps too long\"",
            "**FIX** - Problems to fix: \"inconsistency with chapter 3\", \"name error\", \
             \"timeline doesn't work\"",
        ]),
        Block::section("Creating Annotations"),
        Block::paragraph("There are two ways to create an annotation:"),
        Block::numbered([
            "Select the text to annotate, right-click, and choose the annotation type from the \
             menu",
            "Write the syntax directly in the text",
        ]),
        Block::section("The Syntax"),
        Block::paragraph("The annotation format is:"),
        Block::code("[!TYPE:text:priority:comment]"),
        Block::paragraph("Examples:"),
        Block::code("[!TODO:rewrite this dialogue:1:too formal]"),
        Block::code("[!NOTE:verify historical date::check encyclopedia]"),
        Block::code("[!FIX:Marco is called Luca here:3:]"),
        Block::section("Annotations Panel"),
        Block::paragraph(
            "In the sidebar, the ANNOTATIONS section collects all project annotations, grouped \
             by type (TODO, FIX, NOTE). Clicking an annotation takes you directly to the point \
             in the text where it's located.",
        ),
        Block::paragraph(
            "The badge in the top bar shows the total number of annotations, always giving you \
             visibility on how much revision work awaits.",
        ),
        Block::Spacer(3.0),
        Block::note(
            "**Important:** annotations do NOT appear in PDF export. They're exclusively for \
             the author during the writing process.",
        ),
    ])
}

fn search() -> ContentChapter {
    ContentChapter::new("search", "9. Search and Replace").with_blocks([
        Block::Image(screenshot(
            "filter.png",
            IMAGE_WIDTH_MM,
            "Global filter and search in action",
        )),
        Block::paragraph(
            "Tramando offers powerful search tools for navigating even the largest projects. \
             There are two levels of search: global (across the entire project) and local (on \
             the current chunk).",
        ),
        Block::section("Global Filter"),
        Block::paragraph(
            "The search field at the top of the sidebar filters the entire project. As you \
             type, the sidebar shows only elements that contain the searched text, both in \
             title and content.",
        ),
        Block::bullets([
            "**[Aa]** - Toggle for case-sensitive search",
            r"**[.\*]** - Toggle to enable regular expressions",
            "Results appear as a flat list with the full path",
            "Clicking a result opens it in the editor with matches highlighted",
        ]),
        Block::section("Local Search"),
        Block::paragraph(
            "Press **Ctrl+F** (or **Cmd+F** on Mac) to open the search bar above the editor. \
             This searches only in the current chunk.",
        ),
        Block::bullets([
            "All matches are highlighted in yellow",
            "The current match is highlighted in more intense orange",
            "The **<** and **>** arrows navigate between matches",
            "The **up/down arrow** keys work as an alternative",
            "The counter (e.g., \"3/12\") shows current position out of total",
        ]),
        Block::section("Replace"),
        Block::paragraph(
            "Press **Ctrl+H** (or **Cmd+H** on Mac) to open the replace bar. A second field \
             appears for the replacement text.",
        ),
        Block::bullets([
            "**Replace** - Changes the current match and moves to the next",
            "**Replace all** - Changes all occurrences at once",
            "A message confirms how many replacements were made",
            "**Ctrl+Z** undoes the replacements",
        ]),
        Block::section("Regular Expressions"),
        Block::paragraph(
            r"By activating the [.\*] toggle you can use regular expressions for advanced searches:",
        ),
        Block::bullets([
            r#"**\bword\b** - Finds "word" as a whole word, not as part of other words"#,
            r#"**chap[ter]** - Finds both "chapter" and "chaptor""#,
            r"**\d{4}** - Finds 4-digit sequences (useful for searching years)",
            r#"**^beginning** - Finds "beginning" only at the start of a line"#,
        ]),
    ])
}

fn radial_map() -> ContentChapter {
    ContentChapter::new("map", "10. Radial Map").with_blocks([
        Block::Image(screenshot(
            "map.png",
            IMAGE_WIDTH_MM,
            "The radial map with connections between elements",
        )),
        Block::paragraph(
            "The radial map is a graphical visualization of your story. It lets you \"see\" the \
             plot as a whole, with all the connections between structure and aspects \
             represented visually.",
        ),
        Block::section("Reading the Map"),
        Block::bullets([
            "**Center** - The project title",
            "**Inner ring (blue)** - The narrative structure: chapters and scenes",
            "**Outer rings** - The aspects, each with its color (red characters, green places, \
             etc.)",
            "**Lines** - The connections between scenes and aspects",
        ]),
        Block::section("Interaction"),
        Block::bullets([
            "**Scroll** - Zoom in and out",
            "**Click** - Select an element",
            "**Hover** - Shows details in the info panel",
            "**Drag** - Move the view when zoomed in",
        ]),
        Block::section("Info Panel"),
        Block::paragraph(
            "At the bottom left of the map you'll find the info panel, divided into two \
             sections:",
        ),
        Block::bullets([
            "**HOVER** - Shows information about the element under the cursor",
            "**SELECTION** - Shows information about the element selected by clicking",
        ]),
        Block::paragraph("For each element you see: name, type, ID, and number of connections."),
        Block::section("What It's For"),
        Block::paragraph("The radial map is useful for:"),
        Block::bullets([
            "Seeing character distribution in the story",
            "Identifying overloaded scenes (too many lines = too many elements)",
            "Discovering isolated elements (aspects defined but never used)",
            "Understanding relationships between different elements",
            "Getting an overview for structural decisions",
        ]),
    ])
}

fn export() -> ContentChapter {
    ContentChapter::new("export", "11. PDF Export").with_blocks([
        Block::section("How to Export"),
        Block::numbered([
            "Click on **\"Export\"** in the top bar",
            "Choose **\"PDF\"** from the menu",
            "The file is generated and downloaded automatically",
        ]),
        Block::section("What's Included"),
        Block::bullets([
            "Title page with title and author (taken from project metadata)",
            "Chapters with title at top and page break",
            r"Scenes separated by **\*\*\*** centered",
            "Markdown formatting: bold, italic, headings, lists",
        ]),
        Block::section("What's Excluded"),
        Block::bullets([
            "YAML frontmatter (technical metadata)",
            "[@id] aspect references",
            "Chunk IDs and metadata",
            "Annotations (TODO, NOTE, FIX)",
            "Aspect containers and their content",
        ]),
        Block::note(
            "**In practice:** the export contains only clean narrative, ready for reading or \
             printing. All the \"behind the scenes\" remains hidden.",
        ),
        Block::section("Technical Format"),
        Block::Table(
            TableSpec::new([
                ["Property", "Value"],
                ["Page format", "A5"],
                ["Margins", "60pt top, 70pt bottom, 50pt sides"],
                ["Font", "Roboto"],
                ["Chapter title", "18pt bold"],
                ["Body text", "11pt, justified"],
                ["Line spacing", "1.4"],
                ["Page numbers", "Centered at bottom"],
            ])
            .with_column_widths_mm([60.0, 80.0]),
        ),
        Block::section("Markdown Export"),
        Block::paragraph(
            "As an alternative to PDF, you can export in Markdown format. This is useful if \
             you want to import the text into other programs (Scrivener, Word, etc.) or if you \
             want a text backup of your work.",
        ),
    ])
}

fn settings() -> ContentChapter {
    ContentChapter::new("settings", "12. Settings").with_blocks([
        Block::Image(screenshot("settings.png", 100.0, "The settings panel")),
        Block::section("Themes"),
        Block::paragraph("Tramando includes four preset themes:"),
        Block::Table(
            TableSpec::new([
                ["Theme", "Description"],
                ["Tessuto", "Warm beige with paper texture (default)"],
                ["Dark", "Dark theme with pink accents, for night writing"],
                ["Light", "Light and minimal theme"],
                ["Sepia", "Vintage and warm tones, simulates aged paper"],
            ])
            .with_column_widths_mm([40.0, 100.0]),
        ),
        Block::section("Autosave"),
        Block::paragraph(
            "A slider lets you set the autosave interval from 1 to 10 seconds. The default \
             value is 3 seconds. Autosave occurs N seconds after the last modification.",
        ),
        Block::section("Custom Colors"),
        Block::paragraph("You can customize all interface colors in two sections:"),
        Block::subsection("INTERFACE"),
        Block::bullets([
            "Main background",
            "Sidebar background",
            "Editor background",
            "Borders",
            "Main text",
            "Secondary text",
            "Accent color",
        ]),
        Block::subsection("CATEGORIES"),
        Block::bullets([
            "Structure",
            "Characters",
            "Places",
            "Themes",
            "Sequences",
            "Timeline",
        ]),
        Block::section("Language"),
        Block::paragraph(
            "Tramando is available in Italian and English. Changing the language only modifies \
             the interface; your project content is not altered.",
        ),
        Block::section("Import/Export Settings"),
        Block::paragraph(
            "You can export your settings to an .edn file and reimport them on another device. \
             Useful for maintaining the same theme and configuration across multiple computers.",
        ),
        Block::section("Tutorial"),
        Block::paragraph(
            "The \"Review tutorial\" button reopens the interactive guide you saw on first \
             launch. Useful if you want to refresh your memory on the features.",
        ),
    ])
}

fn file_format() -> ContentChapter {
    ContentChapter::new("file-format", "13. The .trmd File Format").with_blocks([
        Block::paragraph(
            ".trmd files are pure text files, readable with any editor. This ensures your data \
             is always accessible, even without Tramando.",
        ),
        Block::section("General Structure"),
        Block::bullets([
            "**YAML Frontmatter** - Project metadata, enclosed between ---",
            "**Content** - Chunks with their hierarchy",
        ]),
        Block::section("Frontmatter"),
        Block::paragraph("The frontmatter contains project metadata:"),
        Block::code(
            "---\n\
             title: \"My Novel\"\n\
             author: \"Author Name\"\n\
             language: \"en\"\n\
             year: 2024\n\
             isbn: \"\"\n\
             publisher: \"\"\n\
             custom:\n  \
             genre: \"Thriller\"\n\
             ---",
        ),
        Block::section("Chunk Syntax"),
        Block::code(
            "[C:id\"Chunk Title\"][@aspect1][@aspect2]\n\
             Chunk content here...\n  \
             [C:child\"Child Title\"]\n  \
             Child content indented with 2 spaces",
        ),
        Block::bullets([
            "**[C:id\"title\"]** defines a chunk with its ID and title",
            "**[@id]** creates a connection to an aspect",
            "**2 spaces** of indentation = 1 level of nesting",
        ]),
        Block::section("Reserved IDs"),
        Block::paragraph("Some IDs are reserved for aspect containers:"),
        Block::bullets(["personaggi", "luoghi", "temi", "sequenze", "timeline"]),
        Block::note("These IDs cannot be used for other elements."),
        Block::section("Annotations in File"),
        Block::code("Text with [!TODO:to complete:1:urgent] annotation."),
    ])
}

fn shortcuts() -> ContentChapter {
    ContentChapter::new("shortcuts", "14. Keyboard Shortcuts").with_blocks([
        Block::Table(
            TableSpec::new([
                ["Shortcut", "Action"],
                ["Ctrl/Cmd + Z", "Undo"],
                ["Ctrl/Cmd + Shift + Z", "Redo"],
                ["Escape", "Close modals and search bar"],
                ["Ctrl/Cmd + F", "Open search in chunk"],
                ["Ctrl/Cmd + H", "Open search and replace"],
                ["Ctrl/Cmd + Shift + F", "Focus on global filter"],
                ["Up/Down arrow", "Navigate search results"],
                ["F3 / Shift + F3", "Next/previous result"],
            ])
            .with_column_widths_mm([60.0, 80.0]),
        ),
        Block::note("*Note: Cmd is for macOS, Ctrl is for Windows/Linux.*"),
        Block::section("Undo History"),
        Block::paragraph(
            "Tramando keeps the last 100 changes in the undo history. You can freely undo and \
             redo with the shortcuts indicated above.",
        ),
    ])
}

fn appendix() -> ContentChapter {
    ContentChapter::new("appendix", "Appendix: Quick Reference").with_blocks([
        Block::section("Syntax"),
        Block::Table(
            TableSpec::new([
                ["Element", "Syntax"],
                ["Chunk", "[C:id\"Title\"]"],
                ["Aspect reference", "[@id]"],
                ["TODO", "[!TODO:text:priority:comment]"],
                ["NOTE", "[!NOTE:text:priority:comment]"],
                ["FIX", "[!FIX:text:priority:comment]"],
                ["Arabic number", "[:ORD]"],
                ["Uppercase Roman", "[:ORD-ROM]"],
                ["Lowercase Roman", "[:ORD-rom]"],
                ["Uppercase letter", "[:ORD-ALPHA]"],
                ["Lowercase letter", "[:ORD-alpha]"],
            ])
            .with_column_widths_mm([50.0, 90.0]),
        ),
        Block::Spacer(5.0),
        Block::section("Reserved IDs"),
        Block::Table(
            TableSpec::new([
                ["ID", "Type"],
                ["personaggi", "Characters container"],
                ["luoghi", "Places container"],
                ["temi", "Themes container"],
                ["sequenze", "Sequences container"],
                ["timeline", "Timeline container"],
            ])
            .with_column_widths_mm([50.0, 90.0]),
        ),
        Block::Spacer(5.0),
        Block::section("Map Colors"),
        Block::Table(
            TableSpec::new([
                ["Type", "Color", "Hex"],
                ["Structure", "Blue", "#4a90c2"],
                ["Characters", "Red", "#c44a4a"],
                ["Places", "Green", "#4a9a6a"],
                ["Themes", "Orange", "#b87333"],
                ["Sequences", "Purple", "#8a5ac2"],
                ["Timeline", "Blue", "#4a90c2"],
            ])
            .with_column_widths_mm([40.0, 40.0, 40.0]),
        ),
        Block::Spacer(5.0),
        Block::section("Technical Limits"),
        Block::bullets([
            "Undo history: 100 states",
            "Roman numerals: 1-3999",
            "Local storage: ~5-10 MB (depends on browser)",
        ]),
        Block::Spacer(20.0),
        Block::caption("*Tramando - Weave your story*"),
    ])
}

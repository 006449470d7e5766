use crate::model::{ContentBlock as Block, ContentChapter, DocumentPlan, Language, TableSpec};

use super::{front_matter, screenshot, IMAGE_WIDTH_MM};

pub(super) fn plan() -> DocumentPlan {
    let front = front_matter("Tessi la tua storia", "Manuale Utente", "Versione 1.1", "Indice");
    DocumentPlan::new(Language::Italian, "Tramando_Manuale_Italiano.pdf", front)
        .with_chapter(introduzione())
        .with_chapter(primi_passi())
        .with_chapter(markup())
        .with_chapter(interfaccia())
        .with_chapter(struttura())
        .with_chapter(aspetti())
        .with_chapter(collegamenti())
        .with_chapter(annotazioni())
        .with_chapter(ricerca())
        .with_chapter(mappa_radiale())
        .with_chapter(export())
        .with_chapter(impostazioni())
        .with_chapter(formato_file())
        .with_chapter(scorciatoie())
        .with_chapter(appendice())
}

fn introduzione() -> ContentChapter {
    ContentChapter::new("introduction", "1. Introduzione").with_blocks([
        Block::section("Cos'e Tramando"),
        Block::paragraph(
            "Tramando e uno strumento pensato per scrittori che devono gestire storie \
             complesse. Se stai scrivendo un romanzo con decine di personaggi, una \
             sceneggiatura con molteplici linee narrative, o stai costruendo un mondo \
             immaginario con la sua storia e geografia, Tramando ti aiuta a tenere tutto sotto \
             controllo.",
        ),
        Block::paragraph(
            "A differenza di un normale word processor, Tramando non si limita a farti \
             scrivere testo. Ti permette di organizzare la tua storia in blocchi modulari \
             chiamati \"chunk\", di definire personaggi, luoghi e temi come entita separate, e \
             di collegarli tra loro per vedere come si intrecciano nella narrazione.",
        ),
        Block::paragraph(
            "Il risultato e una visione d'insieme della tua opera che sarebbe impossibile \
             ottenere con strumenti tradizionali: puoi vedere in quali scene appare un \
             personaggio, tracciare lo sviluppo di un tema attraverso i capitoli, o verificare \
             la coerenza della timeline.",
        ),
        Block::section("L'origine del nome"),
        Block::paragraph(
            "Il nome \"Tramando\" nasce da un gioco di parole. Da un lato c'e **trama**, perche \
             scrivere e essenzialmente tessere fili narrativi, intrecciare storie e destini. \
             Dall'altro c'e **tramando**, il gerundio che evoca il senso di progettare \
             qualcosa, magari anche un crimine. Come diceva qualcuno, la differenza tra lo \
             scrittore e l'assassino e tenue: semplicemente il primo il progetto non lo mette \
             in atto.",
        ),
        Block::section("La filosofia: tutto e un chunk"),
        Block::paragraph(
            "In Tramando, l'unita base e il **chunk**: un blocco di testo con un titolo e \
             un'identita propria. Un capitolo e un chunk. Una scena e un chunk. Ma anche un \
             personaggio e un chunk, un luogo e un chunk, persino una singola nota puo essere \
             un chunk.",
        ),
        Block::paragraph(
            "I chunk possono contenere altri chunk, creando una struttura ad albero \
             completamente flessibile. Non ci sono regole rigide su come organizzare il tuo \
             lavoro: puoi avere Libro > Parte > Capitolo > Scena, oppure semplicemente una \
             lista piatta di scene. Tramando si adatta al tuo modo di pensare e scrivere, non \
             il contrario.",
        ),
        Block::section("Per chi e Tramando"),
        Block::bullets([
            "**Romanzieri** che gestiscono cast numerosi e trame intrecciate, e hanno bisogno \
             di tracciare chi appare dove e quando",
            "**Sceneggiatori** che devono tenere sotto controllo scene, personaggi, e archi \
             narrativi su piu episodi o atti",
            "**Autori di serie** che devono mantenere coerenza tra volumi, ricordando dettagli \
             stabiliti nei libri precedenti",
            "**Worldbuilder** che costruiscono mondi complessi con la loro storia, geografia, e \
             cast di personaggi",
            "Chiunque scriva storie con **molti elementi interconnessi** e voglia uno strumento \
             per visualizzarli e gestirli",
        ]),
    ])
}

fn primi_passi() -> ContentChapter {
    ContentChapter::new("getting-started", "2. Primi passi").with_blocks([
        Block::section("Avviare Tramando"),
        Block::paragraph(
            "Tramando e disponibile come applicazione desktop per Mac, Windows e Linux. Una \
             volta installato e avviato, ti accogliera la schermata di benvenuto con tre \
             opzioni chiare per iniziare:",
        ),
        Block::bullets([
            "**Continua il lavoro in corso** - Riprende automaticamente l'ultimo progetto su \
             cui stavi lavorando, esattamente dove l'avevi lasciato",
            "**Nuovo progetto** - Crea un progetto completamente vuoto, pronto per accogliere \
             la tua nuova storia",
            "**Apri file...** - Ti permette di caricare un file .trmd esistente dal tuo \
             computer",
        ]),
        Block::Spacer(3.0),
        Block::Image(screenshot(
            "splash.png",
            130.0,
            "La schermata di benvenuto di Tramando",
        )),
        Block::section("Il primo progetto"),
        Block::paragraph(
            "Quando crei un nuovo progetto, Tramando ti presenta un'interfaccia pulita e \
             intuitiva, divisa in due aree principali. A sinistra trovi la **sidebar**, che \
             contiene la struttura del tuo progetto: qui vedrai crescere l'albero dei tuoi \
             capitoli, scene, e tutti gli elementi della storia.",
        ),
        Block::paragraph(
            "A destra c'e l'**editor**, lo spazio dove effettivamente scrivi e modifichi i \
             contenuti. L'editor include funzionalita avanzate come syntax highlighting per il \
             markup, numeri di riga, e la possibilita di passare rapidamente dalla modalita \
             scrittura alla modalita lettura.",
        ),
        Block::section("Salvare il lavoro"),
        Block::paragraph(
            "Tramando salva automaticamente il tuo lavoro ogni pochi secondi. Puoi configurare \
             l'intervallo di autosalvataggio nelle impostazioni, scegliendo un valore tra 1 e \
             10 secondi. Questo significa che non perderai mai piu di qualche secondo di lavoro \
             anche in caso di crash o chiusura accidentale.",
        ),
        Block::paragraph(
            "Oltre all'autosalvataggio, puoi salvare manualmente su file cliccando il pulsante \
             **Salva** nella barra superiore. Il file avra estensione **.trmd** e sara un file \
             di testo leggibile, che potrai aprire anche con un normale editor di testo se \
             necessario.",
        ),
        Block::note(
            "*Consiglio: anche se l'autosalvataggio e attivo, e buona pratica salvare \
             regolarmente su file. Cosi avrai sempre un backup esterno che potrai copiare su \
             cloud o chiavetta USB.*",
        ),
    ])
}

fn markup() -> ContentChapter {
    ContentChapter::new("markup", "3. Cos'e il markup").with_blocks([
        Block::paragraph(
            "Se hai sempre usato programmi come Microsoft Word o Google Docs, potresti non aver \
             mai sentito parlare di \"markup\". Niente paura: e un concetto semplice che, una \
             volta capito, ti sembrera naturale e potente.",
        ),
        Block::section("Formattazione visuale vs markup"),
        Block::paragraph(
            "In Word, quando vuoi mettere una parola in grassetto, la selezioni con il mouse e \
             clicchi sul pulsante B nella toolbar. Questo approccio si chiama **formattazione \
             visuale** o WYSIWYG (What You See Is What You Get): quello che vedi sullo schermo \
             e esattamente quello che ottieni.",
        ),
        Block::paragraph(
            "Con il **markup**, invece, inserisci dei simboli speciali direttamente nel testo. \
             Questi simboli vengono poi interpretati e trasformati nella formattazione \
             desiderata. Per esempio, invece di cliccare un pulsante per il grassetto, scrivi:",
        ),
        Block::code("Questa parola e **importante**"),
        Block::paragraph("E il risultato sara: Questa parola e **importante**"),
        Block::section("Perche usare il markup?"),
        Block::bullets([
            "**Velocita** - Non devi mai togliere le mani dalla tastiera per cercare pulsanti o \
             menu. Scrivi e formatti in un flusso continuo",
            "**Portabilita** - I file sono puro testo, leggibili su qualsiasi dispositivo e con \
             qualsiasi programma",
            "**Controllo** - Vedi sempre esattamente cosa c'e nel documento, senza \
             formattazioni nascoste o stili misteriosi",
            "**Leggerezza** - File piccoli e veloci, nessun formato proprietario, nessun \
             rischio di corruzione",
        ]),
        Block::section("Markdown: lo standard"),
        Block::paragraph(
            "Tramando usa **Markdown**, il linguaggio di markup piu diffuso al mondo. Lo trovi \
             su GitHub, Reddit, Discord, Notion, e centinaia di altre piattaforme. Impararlo \
             una volta ti servira ovunque.",
        ),
        Block::paragraph("Comandi Markdown base:"),
        Block::Table(
            TableSpec::new([
                ["Cosa vuoi", "Cosa scrivi", "Risultato"],
                ["Grassetto", "**testo**", "testo in grassetto"],
                ["Corsivo", "*testo*", "testo in corsivo"],
                ["Titolo", "# Titolo", "Intestazione grande"],
                ["Sottotitolo", "## Sottotitolo", "Intestazione media"],
                ["Elenco puntato", "- elemento", "* elemento"],
                ["Elenco numerato", "1. elemento", "1. elemento"],
            ])
            .with_column_widths_mm([50.0, 40.0, 50.0]),
        ),
        Block::section("Il markup speciale di Tramando"),
        Block::paragraph(
            "Oltre al Markdown standard, Tramando aggiunge una sua sintassi per funzionalita \
             specifiche:",
        ),
        Block::Table(
            TableSpec::new([
                ["Funzione", "Sintassi", "Esempio"],
                ["Riferimento aspetto", "[@id]", "[@elena]"],
                [
                    "Annotazione TODO",
                    "[!TODO:testo:priorita:commento]",
                    "[!TODO:riscrivere:1:troppo lungo]",
                ],
                ["Annotazione NOTE", "[!NOTE:testo::commento]", "[!NOTE:verificare data::]"],
                ["Annotazione FIX", "[!FIX:testo:priorita:]", "[!FIX:errore nome:2:]"],
                ["Numero arabo", "[:ORD]", "1, 2, 3..."],
                ["Numero romano", "[:ORD-ROM]", "I, II, III..."],
            ])
            .with_column_widths_mm([45.0, 60.0, 50.0]),
        ),
        Block::section("Non preoccuparti!"),
        Block::paragraph(
            "Tramando evidenzia tutto il markup con colori diversi, rendendo facile \
             distinguere i simboli speciali dal testo normale. Inoltre, il tab **Lettura** ti \
             mostra sempre il risultato finale, senza alcun simbolo visibile.",
        ),
        Block::note(
            r"*Dopo qualche giorno di utilizzo, scrivere \*\*grassetto\*\* o [@personaggio] ti verra naturale quanto cliccare un pulsante. E sarai molto piu veloce.*",
        ),
    ])
}

fn interfaccia() -> ContentChapter {
    ContentChapter::new("interface", "4. L'interfaccia").with_blocks([
        Block::Image(screenshot(
            "main.png",
            160.0,
            "L'interfaccia principale di Tramando",
        )),
        Block::section("La barra superiore"),
        Block::paragraph("La barra in alto contiene tutti i comandi principali dell'applicazione:"),
        Block::bullets([
            "**Logo Tramando** - Cliccandolo torni alla schermata di benvenuto",
            "**Titolo progetto** - Mostra il nome del progetto corrente; cliccandolo puoi \
             modificare i metadati (titolo, autore, anno...)",
            "**Carica** - Apre un file .trmd dal tuo computer",
            "**Salva** - Scarica il progetto corrente come file .trmd",
            "**Esporta** - Menu a tendina per esportare in PDF o Markdown",
            "**Badge Annotazioni** - Mostra il numero totale di annotazioni; cliccandolo apri \
             il pannello annotazioni",
            "**Toggle Mappa/Editor** - Alterna tra la vista mappa radiale e l'editor di testo",
            "**Ingranaggio** - Apre il pannello delle impostazioni",
        ]),
        Block::section("La sidebar"),
        Block::paragraph("Il pannello laterale sinistro e il centro di navigazione del tuo progetto:"),
        Block::subsection("Campo filtro"),
        Block::paragraph(
            "In cima alla sidebar trovi un campo di ricerca che filtra l'intero progetto. \
             Digitando, vedrai solo gli elementi che contengono il testo cercato, sia nel \
             titolo che nel contenuto.",
        ),
        Block::subsection("STRUTTURA"),
        Block::paragraph(
            "Questa sezione contiene la tua narrativa vera e propria: capitoli, scene, parti. E \
             organizzata come un albero espandibile. Il numero tra parentesi indica quanti \
             elementi contiene.",
        ),
        Block::subsection("ASPETTI"),
        Block::paragraph(
            "Qui trovi i cinque tipi di elementi trasversali, ognuno con il suo colore \
             distintivo: **Personaggi** (rosso), **Luoghi** (verde), **Temi** (arancione), \
             **Sequenze** (viola), **Timeline** (blu). Il numero tra parentesi indica in quante \
             scene ogni elemento e utilizzato.",
        ),
        Block::section("L'editor"),
        Block::paragraph(
            "L'area principale a destra e dove avviene la scrittura. Include tre tab:",
        ),
        Block::bullets([
            "**Modifica** - L'editor vero e proprio, con numeri di riga e syntax highlighting",
            "**Figli / Usato da** - Mostra gli elementi contenuti (per la struttura) o le scene \
             che usano questo elemento (per gli aspetti)",
            "**Lettura** - Anteprima pulita del testo, senza markup visibile",
        ]),
        Block::paragraph(
            "Sopra l'editor trovi: il campo per modificare il titolo, i tag degli aspetti \
             collegati, il pulsante \"+ Aspetto\" per aggiungere collegamenti, e il selettore \
             \"Parent\" per spostare l'elemento nella gerarchia.",
        ),
    ])
}

fn struttura() -> ContentChapter {
    ContentChapter::new("structure", "5. La Struttura narrativa").with_blocks([
        Block::section("Organizzazione ad albero"),
        Block::paragraph(
            "La sezione STRUTTURA nella sidebar contiene il testo della tua storia, \
             organizzato come un albero gerarchico. Ogni elemento puo contenere altri elementi, \
             permettendoti di creare la struttura che preferisci.",
        ),
        Block::paragraph(
            "Una struttura tipica potrebbe essere: **Libro** > **Parte** > **Capitolo** > \
             **Scena**. Ma non ci sono regole fisse: potresti avere solo capitoli, oppure scene \
             senza capitoli, oppure una struttura completamente diversa. Tramando si adatta a \
             te.",
        ),
        Block::section("Creare nuovi elementi"),
        Block::bullets([
            "Clicca **\"+ Nuovo Chunk\"** nella sidebar per creare un elemento al livello root",
            "Clicca **\"+ Figlio di [nome]\"** per creare un elemento annidato dentro quello \
             selezionato",
            "Ogni chunk riceve automaticamente un ID unico (es. cap-1, scene-2)",
            "Puoi modificare l'ID per renderlo piu significativo (es. \"prologo\", \"climax\")",
        ]),
        Block::section("Numerazione automatica"),
        Block::paragraph(
            "Tramando supporta macro speciali nel titolo che vengono sostituite con numeri \
             automatici, basati sulla posizione dell'elemento tra i suoi fratelli.",
        ),
        Block::Table(
            TableSpec::new([
                ["Macro", "Risultato", "Esempio"],
                ["[:ORD]", "Numeri arabi", "1, 2, 3, 4..."],
                ["[:ORD-ROM]", "Romani maiuscoli", "I, II, III, IV..."],
                ["[:ORD-rom]", "Romani minuscoli", "i, ii, iii, iv..."],
                ["[:ORD-ALPHA]", "Lettere maiuscole", "A, B, C, D..."],
                ["[:ORD-alpha]", "Lettere minuscole", "a, b, c, d..."],
            ])
            .with_column_widths_mm([40.0, 50.0, 50.0]),
        ),
        Block::note(
            "Se scrivi \"Capitolo [:ORD]: Il risveglio\" come titolo del primo capitolo, \
             apparira come \"Capitolo 1: Il risveglio\". Il secondo capitolo con \"Capitolo \
             [:ORD]: La partenza\" diventera \"Capitolo 2: La partenza\", e cosi via.",
        ),
    ])
}

fn aspetti() -> ContentChapter {
    ContentChapter::new("aspects", "6. Gli Aspetti").with_blocks([
        Block::paragraph(
            "Gli aspetti sono elementi che attraversano la storia in modo trasversale. Non \
             fanno parte della sequenza narrativa lineare, ma si collegano ad essa in vari \
             punti. Tramando definisce cinque tipi di aspetti, ognuno con un colore distintivo.",
        ),
        Block::section("Personaggi"),
        Block::note("*Colore: rosso (#c44a4a)*"),
        Block::paragraph(
            "I personaggi sono le entita che abitano il tuo mondo narrativo. Ogni personaggio \
             puo avere una scheda con la sua descrizione, e puoi creare sotto-elementi per \
             organizzare le informazioni: aspetto fisico, background, arco narrativo, relazioni \
             con altri personaggi.",
        ),
        Block::paragraph(
            "Collegando un personaggio alle scene in cui appare, potrai sempre sapere dove e \
             quando interviene nella storia, facilitando il controllo della coerenza.",
        ),
        Block::section("Luoghi"),
        Block::note("*Colore: verde (#4a9a6a)*"),
        Block::paragraph(
            "I luoghi sono gli spazi dove accadono le cose. Puoi organizzarli \
             gerarchicamente: un Paese contiene Citta, che contengono Quartieri, che \
             contengono Edifici, che contengono Stanze.",
        ),
        Block::paragraph(
            "Ogni luogo puo avere la sua descrizione dettagliata, e collegandolo alle scene \
             saprai sempre dove si svolge ogni momento della storia.",
        ),
        Block::section("Temi"),
        Block::note("*Colore: arancione (#b87333)*"),
        Block::paragraph(
            "I temi sono le idee e i motivi ricorrenti della tua storia: vendetta, redenzione, \
             amore, tradimento, crescita personale. Definendoli come aspetti e collegandoli \
             alle scene pertinenti, puoi tracciare come ogni tema si sviluppa attraverso la \
             narrazione.",
        ),
        Block::paragraph(
            "Questo e particolarmente utile in fase di revisione, quando vuoi assicurarti che \
             un tema sia stato sviluppato adeguatamente o che non sia stato abbandonato a meta \
             storia.",
        ),
        Block::section("Sequenze"),
        Block::note("*Colore: viola (#8a5ac2)*"),
        Block::paragraph(
            "Le sequenze sono catene di causa-effetto che attraversano la storia. A differenza \
             della struttura narrativa (che segue l'ordine di lettura), le sequenze seguono la \
             logica interna degli eventi.",
        ),
        Block::paragraph(
            "Per esempio, una sequenza \"Vendetta di Marco\" potrebbe avere come figli: \
             \"Scoperta del tradimento\" > \"Pianificazione\" > \"Primo tentativo fallito\" > \
             \"Successo\" > \"Conseguenze\". Questi passi potrebbero essere sparsi in capitoli \
             diversi, ma la sequenza li tiene collegati.",
        ),
        Block::section("Timeline"),
        Block::note("*Colore: blu (#4a90c2)*"),
        Block::paragraph(
            "La timeline contiene eventi in ordine cronologico reale, indipendentemente da come \
             appaiono nella narrazione. E particolarmente utile quando la tua storia non e \
             lineare: flashback, flashforward, o narrazioni parallele.",
        ),
        Block::paragraph(
            "Puoi usare date o timestamp nei titoli degli eventi (es. \"2024-03-15 08:00 - \
             Risveglio\") per mantenere l'ordine corretto.",
        ),
        Block::note(
            "*Consiglio: usa il formato data ISO (AAAA-MM-GG) nei titoli della timeline per un \
             ordinamento alfabetico che corrisponda all'ordine cronologico.*",
        ),
        Block::section("Creare aspetti"),
        Block::paragraph(
            "Per creare un nuovo aspetto, clicca il pulsante **\"+ Nuovo aspetto\"** nella \
             sidebar, sotto la categoria desiderata. Ogni aspetto avra il suo ID univoco e \
             potrai dargli un titolo descrittivo.",
        ),
    ])
}

fn collegamenti() -> ContentChapter {
    ContentChapter::new("connections", "7. I collegamenti").with_blocks([
        Block::paragraph(
            "La vera potenza di Tramando sta nei collegamenti tra la struttura narrativa e gli \
             aspetti. Collegando scene a personaggi, luoghi e temi, crei una rete di relazioni \
             che ti permette di navigare e analizzare la tua storia in modi impossibili con \
             strumenti tradizionali.",
        ),
        Block::section("Sintassi [@id]"),
        Block::paragraph(
            "Il modo piu diretto per creare un collegamento e scrivere **[@id]** nel testo \
             della scena, dove \"id\" e l'identificatore dell'aspetto che vuoi collegare.",
        ),
        Block::paragraph(
            "Per esempio, se hai un personaggio con ID \"elena\", scrivendo [@elena] in una \
             scena crei automaticamente un collegamento. Questo metodo e particolarmente utile \
             quando vuoi segnare il punto esatto in cui un elemento appare nel testo.",
        ),
        Block::section("Metodo tag"),
        Block::paragraph("Un'alternativa e usare i tag visivi sopra l'editor:"),
        Block::numbered([
            "Seleziona la scena che vuoi collegare",
            "Clicca sul pulsante **\"+ Aspetto\"** sopra l'editor",
            "Scegli l'aspetto dal menu che appare",
            "Il tag apparira sotto il titolo della scena",
        ]),
        Block::paragraph("Per rimuovere un collegamento, clicca sulla **x** accanto al tag."),
        Block::section("Tab \"Usato da\""),
        Block::paragraph(
            "Quando selezioni un aspetto (personaggio, luogo, tema...), il tab \"Usato da\" ti \
             mostra tutte le scene che lo referenziano. E un modo veloce per rispondere alla \
             domanda: \"Dove appare questo elemento nella storia?\"",
        ),
        Block::section("Conteggio nella sidebar"),
        Block::paragraph(
            "Nella sidebar, accanto a ogni aspetto, vedi un numero tra parentesi (es. \"Elena \
             (6)\"). Questo indica in quante scene l'elemento e collegato, dandoti subito \
             un'idea della sua importanza nella storia.",
        ),
        Block::section("Best practices"),
        Block::bullets([
            "Usa ID brevi e significativi: \"elena\" e meglio di \"personaggio-001\"",
            "Crea i collegamenti mentre scrivi, non dopo - e piu facile e mantiene la \
             consistenza",
            "Non esagerare: collega solo gli aspetti veramente rilevanti per ogni scena",
            "Usa i tag per aspetti ricorrenti, [@id] nel testo per riferimenti specifici",
        ]),
    ])
}

fn annotazioni() -> ContentChapter {
    ContentChapter::new("annotations", "8. Le annotazioni").with_blocks([
        Block::paragraph(
            "Le annotazioni sono note che lasci per te stesso durante la scrittura. Sono \
             visibili in Tramando ma non appariranno mai nel prodotto finale esportato. Sono il \
             tuo spazio per appunti, promemoria e segnalazioni.",
        ),
        Block::section("Tipi di annotazione"),
        Block::bullets([
            "**TODO** - Cose da fare: \"aggiungere descrizione del luogo\", \"sviluppare il \
             dialogo\", \"ricercare dettagli storici\"",
            "**NOTE** - Appunti e riflessioni: \"verificare questa data\", \"idea per il \
             sequel\", \"forse troppo lungo\"",
            "**FIX** - Problemi da correggere: \"incongruenza con capitolo 3\", \"errore nel \
             nome\", \"timeline non torna\"",
        ]),
        Block::section("Creare annotazioni"),
        Block::paragraph("Ci sono due modi per creare un'annotazione:"),
        Block::numbered([
            "Seleziona il testo da annotare, clicca destro, e scegli il tipo di annotazione dal \
             menu",
            "Scrivi direttamente la sintassi nel testo",
        ]),
        Block::section("La sintassi"),
        Block::paragraph("Il formato delle annotazioni e:"),
        Block::code("[!TIPO:testo:priorita:commento]"),
        Block::paragraph("Esempi:"),
        Block::code("[!TODO:riscrivere questo dialogo:1:troppo formale]"),
        Block::code("[!NOTE:verificare data storica::controllare enciclopedia]"),
        Block::code("[!FIX:Marco qui si chiama Luca:3:]"),
        Block::section("Pannello Annotazioni"),
        Block::paragraph(
            "Nella sidebar, la sezione ANNOTAZIONI raccoglie tutte le annotazioni del progetto, \
             raggruppate per tipo (TODO, FIX, NOTE). Cliccando su un'annotazione, salti \
             direttamente al punto del testo dove si trova.",
        ),
        Block::paragraph(
            "Il badge nella barra superiore mostra il numero totale di annotazioni, dandoti \
             sempre visibilita su quanto lavoro di revisione ti aspetta.",
        ),
        Block::Spacer(3.0),
        Block::note(
            "**Importante:** le annotazioni NON appaiono nell'export PDF. Sono esclusivamente \
             per l'autore durante il processo di scrittura.",
        ),
    ])
}

fn ricerca() -> ContentChapter {
    ContentChapter::new("search", "9. Cerca e sostituisci").with_blocks([
        Block::Image(screenshot(
            "filter.png",
            IMAGE_WIDTH_MM,
            "Il filtro globale e la ricerca in azione",
        )),
        Block::paragraph(
            "Tramando offre strumenti di ricerca potenti per navigare anche i progetti piu \
             grandi. Ci sono due livelli di ricerca: globale (su tutto il progetto) e locale \
             (sul chunk corrente).",
        ),
        Block::section("Filtro globale"),
        Block::paragraph(
            "Il campo di ricerca in cima alla sidebar filtra l'intero progetto. Mentre digiti, \
             la sidebar mostra solo gli elementi che contengono il testo cercato, sia nel \
             titolo che nel contenuto.",
        ),
        Block::bullets([
            "**[Aa]** - Toggle per ricerca case-sensitive (distingue maiuscole/minuscole)",
            r"**[.\*]** - Toggle per attivare le espressioni regolari",
            "I risultati appaiono come lista piatta con il percorso completo",
            "Cliccando un risultato, si apre nell'editor con i match evidenziati",
        ]),
        Block::section("Ricerca locale"),
        Block::paragraph(
            "Premi **Ctrl+F** (o **Cmd+F** su Mac) per aprire la barra di ricerca sopra \
             l'editor. Questa cerca solo nel chunk corrente.",
        ),
        Block::bullets([
            "Tutti i match sono evidenziati in giallo",
            "Il match corrente e evidenziato in arancione piu intenso",
            "Le frecce **<** e **>** navigano tra i match",
            "I tasti **freccia su/giu** funzionano come alternativa",
            "Il contatore (es. \"3/12\") mostra la posizione corrente sul totale",
        ]),
        Block::section("Sostituisci"),
        Block::paragraph(
            "Premi **Ctrl+H** (o **Cmd+H** su Mac) per aprire la barra di sostituzione. Appare \
             un secondo campo per il testo di sostituzione.",
        ),
        Block::bullets([
            "**Sostituisci** - Cambia il match corrente e passa al successivo",
            "**Sostituisci tutti** - Cambia tutte le occorrenze in una volta",
            "Un messaggio conferma quante sostituzioni sono state effettuate",
            "**Ctrl+Z** annulla le sostituzioni",
        ]),
        Block::section("Espressioni regolari"),
        Block::paragraph(
            r"Attivando il toggle [.\*] puoi usare espressioni regolari per ricerche avanzate:",
        ),
        Block::bullets([
            r#"**\bparola\b** - Trova "parola" come parola intera, non come parte di altre parole"#,
            r#"**cap[ií]tolo** - Trova sia "capitolo" che "capítolo""#,
            r"**\d{4}** - Trova sequenze di 4 cifre (utile per cercare anni)",
            r#"**^inizio** - Trova "inizio" solo a inizio riga"#,
        ]),
    ])
}

fn mappa_radiale() -> ContentChapter {
    ContentChapter::new("map", "10. La mappa radiale").with_blocks([
        Block::Image(screenshot(
            "map.png",
            IMAGE_WIDTH_MM,
            "La mappa radiale con i collegamenti tra elementi",
        )),
        Block::paragraph(
            "La mappa radiale e una visualizzazione grafica della tua storia. Ti permette di \
             \"vedere\" la trama nel suo insieme, con tutti i collegamenti tra struttura e \
             aspetti rappresentati visivamente.",
        ),
        Block::section("Leggere la mappa"),
        Block::bullets([
            "**Centro** - Il titolo del progetto",
            "**Anello interno (blu)** - La struttura narrativa: capitoli e scene",
            "**Anelli esterni** - Gli aspetti, ognuno con il suo colore (rosso personaggi, \
             verde luoghi, etc.)",
            "**Linee** - I collegamenti tra scene e aspetti",
        ]),
        Block::section("Interazione"),
        Block::bullets([
            "**Scroll** - Zoom in e out",
            "**Click** - Seleziona un elemento",
            "**Hover** - Mostra dettagli nel pannello informativo",
            "**Drag** - Sposta la vista quando sei in zoom",
        ]),
        Block::section("Pannello informativo"),
        Block::paragraph(
            "In basso a sinistra della mappa trovi il pannello informativo, diviso in due \
             sezioni:",
        ),
        Block::bullets([
            "**HOVER** - Mostra informazioni sull'elemento sotto il cursore",
            "**SELEZIONE** - Mostra informazioni sull'elemento selezionato con click",
        ]),
        Block::paragraph("Per ogni elemento vedi: nome, tipo, ID, e numero di collegamenti."),
        Block::section("A cosa serve"),
        Block::paragraph("La mappa radiale e utile per:"),
        Block::bullets([
            "Vedere la distribuzione dei personaggi nella storia",
            "Identificare scene sovraccariche (troppe linee = troppi elementi)",
            "Scoprire elementi isolati (aspetti definiti ma mai usati)",
            "Capire le relazioni tra elementi diversi",
            "Avere una visione d'insieme per decisioni strutturali",
        ]),
    ])
}

fn export() -> ContentChapter {
    ContentChapter::new("export", "11. Export PDF").with_blocks([
        Block::section("Come esportare"),
        Block::numbered([
            "Clicca su **\"Esporta\"** nella barra superiore",
            "Scegli **\"PDF\"** dal menu",
            "Il file viene generato e scaricato automaticamente",
        ]),
        Block::section("Cosa viene incluso"),
        Block::bullets([
            "Pagina titolo con titolo e autore (presi dai metadati del progetto)",
            "Capitoli con titolo in testa e interruzione di pagina",
            r"Scene separate da **\*\*\*** centrato",
            "Formattazione Markdown: grassetto, corsivo, intestazioni, liste",
        ]),
        Block::section("Cosa viene escluso"),
        Block::bullets([
            "Frontmatter YAML (metadati tecnici)",
            "Riferimenti [@id] agli aspetti",
            "ID e metadati dei chunk",
            "Annotazioni (TODO, NOTE, FIX)",
            "Container degli aspetti e il loro contenuto",
        ]),
        Block::note(
            "**In pratica:** l'export contiene solo la narrativa pulita, pronta per la lettura \
             o la stampa. Tutto il \"dietro le quinte\" rimane nascosto.",
        ),
        Block::section("Formato tecnico"),
        Block::Table(
            TableSpec::new([
                ["Proprieta", "Valore"],
                ["Formato pagina", "A5"],
                ["Margini", "60pt sopra, 70pt sotto, 50pt lati"],
                ["Font", "Roboto"],
                ["Titolo capitolo", "18pt bold"],
                ["Corpo testo", "11pt, giustificato"],
                ["Interlinea", "1.4"],
                ["Numeri pagina", "Centrati in basso"],
            ])
            .with_column_widths_mm([60.0, 80.0]),
        ),
        Block::section("Export Markdown"),
        Block::paragraph(
            "In alternativa al PDF, puoi esportare in formato Markdown. Questo e utile se vuoi \
             importare il testo in altri programmi (Scrivener, Word, etc.) o se vuoi un backup \
             testuale del tuo lavoro.",
        ),
    ])
}

fn impostazioni() -> ContentChapter {
    ContentChapter::new("settings", "12. Impostazioni").with_blocks([
        Block::Image(screenshot(
            "settings.png",
            100.0,
            "Il pannello delle impostazioni",
        )),
        Block::section("Temi"),
        Block::paragraph("Tramando include quattro temi predefiniti:"),
        Block::Table(
            TableSpec::new([
                ["Tema", "Descrizione"],
                ["Tessuto", "Beige caldo con texture di carta (default)"],
                ["Dark", "Tema scuro con accenti rosa, per scrittura notturna"],
                ["Light", "Tema chiaro e minimale"],
                ["Sepia", "Toni vintage e caldi, simula carta invecchiata"],
            ])
            .with_column_widths_mm([40.0, 100.0]),
        ),
        Block::section("Autosalvataggio"),
        Block::paragraph(
            "Uno slider ti permette di impostare l'intervallo di autosalvataggio da 1 a 10 \
             secondi. Il valore predefinito e 3 secondi. L'autosalvataggio avviene dopo N \
             secondi dall'ultima modifica.",
        ),
        Block::section("Colori personalizzati"),
        Block::paragraph("Puoi personalizzare tutti i colori dell'interfaccia in due sezioni:"),
        Block::subsection("INTERFACCIA"),
        Block::bullets([
            "Sfondo principale",
            "Sfondo sidebar",
            "Sfondo editor",
            "Bordi",
            "Testo principale",
            "Testo secondario",
            "Colore accento",
        ]),
        Block::subsection("CATEGORIE"),
        Block::bullets([
            "Struttura",
            "Personaggi",
            "Luoghi",
            "Temi",
            "Sequenze",
            "Timeline",
        ]),
        Block::section("Lingua"),
        Block::paragraph(
            "Tramando e disponibile in Italiano e Inglese. Il cambio lingua modifica solo \
             l'interfaccia; il contenuto dei tuoi progetti non viene alterato.",
        ),
        Block::section("Import/Export impostazioni"),
        Block::paragraph(
            "Puoi esportare le tue impostazioni in un file .edn e reimportarle su un altro \
             dispositivo. Utile per mantenere lo stesso tema e configurazione su piu computer.",
        ),
        Block::section("Tutorial"),
        Block::paragraph(
            "Il pulsante \"Rivedi tutorial\" riapre la guida interattiva che hai visto al primo \
             avvio. Utile se vuoi rinfrescare la memoria sulle funzionalita.",
        ),
    ])
}

fn formato_file() -> ContentChapter {
    ContentChapter::new("file-format", "13. Il formato file .trmd").with_blocks([
        Block::paragraph(
            "I file .trmd sono file di testo puro, leggibili con qualsiasi editor. Questo \
             garantisce che i tuoi dati siano sempre accessibili, anche senza Tramando.",
        ),
        Block::section("Struttura generale"),
        Block::bullets([
            "**Frontmatter YAML** - Metadati del progetto, racchiusi tra ---",
            "**Contenuto** - I chunk con la loro gerarchia",
        ]),
        Block::section("Frontmatter"),
        Block::paragraph("Il frontmatter contiene i metadati del progetto:"),
        Block::code(
            "---\n\
             title: \"Il mio romanzo\"\n\
             author: \"Nome Autore\"\n\
             language: \"it\"\n\
             year: 2024\n\
             isbn: \"\"\n\
             publisher: \"\"\n\
             custom:\n  \
             genere: \"Thriller\"\n\
             ---",
        ),
        Block::section("Sintassi chunk"),
        Block::code(
            "[C:id\"Titolo del chunk\"][@aspetto1][@aspetto2]\n\
             Contenuto del chunk qui...\n  \
             [C:figlio\"Titolo figlio\"]\n  \
             Contenuto figlio indentato con 2 spazi",
        ),
        Block::bullets([
            "**[C:id\"titolo\"]** definisce un chunk con il suo ID e titolo",
            "**[@id]** crea un collegamento a un aspetto",
            "**2 spazi** di indentazione = 1 livello di nidificazione",
        ]),
        Block::section("ID riservati"),
        Block::paragraph("Alcuni ID sono riservati per i container degli aspetti:"),
        Block::bullets(["personaggi", "luoghi", "temi", "sequenze", "timeline"]),
        Block::note("Questi ID non possono essere usati per altri elementi."),
        Block::section("Annotazioni nel file"),
        Block::code("Testo con [!TODO:da completare:1:urgente] annotazione."),
    ])
}

fn scorciatoie() -> ContentChapter {
    ContentChapter::new("shortcuts", "14. Scorciatoie da tastiera").with_blocks([
        Block::Table(
            TableSpec::new([
                ["Scorciatoia", "Azione"],
                ["Ctrl/Cmd + Z", "Annulla (Undo)"],
                ["Ctrl/Cmd + Shift + Z", "Ripristina (Redo)"],
                ["Escape", "Chiude modali e barra ricerca"],
                ["Ctrl/Cmd + F", "Apre ricerca nel chunk"],
                ["Ctrl/Cmd + H", "Apre cerca e sostituisci"],
                ["Ctrl/Cmd + Shift + F", "Focus su filtro globale"],
                ["Freccia su/giu", "Naviga risultati ricerca"],
                ["F3 / Shift + F3", "Prossimo/precedente risultato"],
            ])
            .with_column_widths_mm([60.0, 80.0]),
        ),
        Block::note("*Nota: Cmd e per macOS, Ctrl e per Windows/Linux.*"),
        Block::section("Cronologia Undo"),
        Block::paragraph(
            "Tramando mantiene le ultime 100 modifiche nella cronologia di undo. Puoi annullare \
             e ripristinare liberamente con le scorciatoie sopra indicate.",
        ),
    ])
}

fn appendice() -> ContentChapter {
    ContentChapter::new("appendix", "Appendice: Riferimento rapido").with_blocks([
        Block::section("Sintassi"),
        Block::Table(
            TableSpec::new([
                ["Elemento", "Sintassi"],
                ["Chunk", "[C:id\"Titolo\"]"],
                ["Riferimento aspetto", "[@id]"],
                ["TODO", "[!TODO:testo:priorita:commento]"],
                ["NOTE", "[!NOTE:testo:priorita:commento]"],
                ["FIX", "[!FIX:testo:priorita:commento]"],
                ["Numero arabo", "[:ORD]"],
                ["Romano maiuscolo", "[:ORD-ROM]"],
                ["Romano minuscolo", "[:ORD-rom]"],
                ["Lettera maiuscola", "[:ORD-ALPHA]"],
                ["Lettera minuscola", "[:ORD-alpha]"],
            ])
            .with_column_widths_mm([50.0, 90.0]),
        ),
        Block::Spacer(5.0),
        Block::section("ID riservati"),
        Block::Table(
            TableSpec::new([
                ["ID", "Tipo"],
                ["personaggi", "Container personaggi"],
                ["luoghi", "Container luoghi"],
                ["temi", "Container temi"],
                ["sequenze", "Container sequenze"],
                ["timeline", "Container timeline"],
            ])
            .with_column_widths_mm([50.0, 90.0]),
        ),
        Block::Spacer(5.0),
        Block::section("Colori mappa"),
        Block::Table(
            TableSpec::new([
                ["Tipo", "Colore", "Hex"],
                ["Struttura", "Blu", "#4a90c2"],
                ["Personaggi", "Rosso", "#c44a4a"],
                ["Luoghi", "Verde", "#4a9a6a"],
                ["Temi", "Arancione", "#b87333"],
                ["Sequenze", "Viola", "#8a5ac2"],
                ["Timeline", "Blu", "#4a90c2"],
            ])
            .with_column_widths_mm([40.0, 40.0, 40.0]),
        ),
        Block::Spacer(5.0),
        Block::section("Limiti tecnici"),
        Block::bullets([
            "Cronologia Undo: 100 stati",
            "Numeri romani: 1-3999",
            "Storage locale: ~5-10 MB (dipende dal browser)",
        ]),
        Block::Spacer(20.0),
        Block::caption("*Tramando - Tessi la tua storia*"),
    ])
}

// Predefined paths
//
// A handful of frequent roots inflect in ways the suffix graph does not
// model: `ben` never takes the plural, `o` takes `nlar` instead of `lar`,
// `demek` and `yemek` narrow their vowel before `y` (`diyecek`, `yiyor`).
// For these roots every accepted path is built in advance and the parser
// starts from the built containers instead of the bare root.
//
// Each path is a list of (suffix, literal form) steps. A step whose suffix
// does not leave the current state directly may pass through exactly one
// intermediate state over a blank transition.

use std::sync::Arc;

use hashbrown::HashMap;
use trnltk_core::{PrimaryPos, Root, SecondaryPos};

use crate::container::MorphemeContainer;
use crate::graph::{GraphError, StateId, SuffixGraph, SuffixId};
use crate::lexicon::RootMap;
use crate::parser::applier::{self, DeclaredForm, SuffixApplier};
use crate::phonetics::SuffixFormSequence;

/// Prebuilt containers, keyed by root.
#[derive(Debug, Default)]
pub struct PredefinedPaths {
    paths: HashMap<Arc<Root>, Vec<MorphemeContainer>>,
}

impl PredefinedPaths {
    /// Build every path whose root is present in `roots`. Roots missing
    /// from the lexicon are skipped.
    pub fn build(graph: &SuffixGraph, roots: &RootMap) -> Result<Self, GraphError> {
        let mut table = Table {
            graph,
            applier: SuffixApplier::new(graph),
            roots,
            paths: HashMap::new(),
        };
        table.verbs()?;
        table.su()?;
        table.personal_pronouns()?;
        table.demonstrative_pronouns()?;
        table.kendi()?;
        table.hep()?;
        table.question_particles()?;
        table.ne()?;
        table.locative_pronouns()?;
        table.iceri_disari()?;
        table.quantifying_pronouns()?;

        let count: usize = table.paths.values().map(Vec::len).sum();
        log::debug!("{} predefined paths for {} roots", count, table.paths.len());
        Ok(Self { paths: table.paths })
    }

    /// The containers prebuilt for `root`, if any.
    pub fn paths(&self, root: &Root) -> Option<&[MorphemeContainer]> {
        self.paths.get(root).map(Vec::as_slice)
    }

    pub fn has_paths(&self, root: &Root) -> bool {
        self.paths.contains_key(root)
    }

    /// Number of prebuilt containers.
    pub fn len(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Path building
// ---------------------------------------------------------------------------

type Step<'s> = (&'s str, &'s str);

struct Table<'a> {
    graph: &'a SuffixGraph,
    applier: SuffixApplier<'a>,
    roots: &'a RootMap,
    paths: HashMap<Arc<Root>, Vec<MorphemeContainer>>,
}

impl Table<'_> {
    fn root(
        &self,
        sequence: &str,
        pos: PrimaryPos,
        secondary: Option<SecondaryPos>,
    ) -> Result<Option<Arc<Root>>, GraphError> {
        let found: Vec<&Arc<Root>> = self
            .roots
            .get(sequence)
            .iter()
            .filter(|r| r.lexeme.primary_pos == pos && r.lexeme.secondary_pos == secondary)
            .collect();
        match found.as_slice() {
            [] => {
                log::debug!("no root '{sequence}' in the lexicon, skipping its predefined paths");
                Ok(None)
            }
            [root] => Ok(Some(Arc::clone(root))),
            _ => Err(GraphError::AmbiguousPredefinedRoot {
                root: sequence.to_string(),
                count: found.len(),
            }),
        }
    }

    /// Build one path from `root` and register it.
    fn add(&mut self, root: &Option<Arc<Root>>, steps: &[Step<'_>]) -> Result<(), GraphError> {
        let Some(root) = root else {
            return Ok(());
        };
        let state = self
            .graph
            .default_state(root)
            .ok_or_else(|| GraphError::MissingDefaultState(root.sequence.clone()))?;
        let mut c = MorphemeContainer::new(Arc::clone(root), state, &root.sequence);
        for &(suffix, form) in steps {
            c = self.follow(c, suffix, form)?;
        }
        self.paths.entry(Arc::clone(root)).or_default().push(c);
        Ok(())
    }

    fn follow(&self, c: MorphemeContainer, suffix_name: &str, form: &str) -> Result<MorphemeContainer, GraphError> {
        let suffix = self
            .graph
            .suffix_by_name(suffix_name)
            .ok_or_else(|| GraphError::UnknownSuffix(suffix_name.to_string()))?;
        if let Some(target) = self.target(c.last_state(), suffix) {
            return self.apply(&c, suffix, form, target);
        }

        let (intermediate, via) = self.intermediate(&c, suffix, suffix_name)?;
        let c = self.apply(&c, via, "", intermediate)?;
        let target = self
            .target(intermediate, suffix)
            .ok_or_else(|| self.step_error(&c, suffix_name, form))?;
        self.apply(&c, suffix, form, target)
    }

    fn target(&self, from: StateId, suffix: SuffixId) -> Option<StateId> {
        self.graph.edges_with_suffix(from, suffix).next().map(|e| e.target)
    }

    /// The single state one edge away from the current one that has an
    /// edge with `suffix`, and the suffix leading to it.
    fn intermediate(
        &self,
        c: &MorphemeContainer,
        suffix: SuffixId,
        suffix_name: &str,
    ) -> Result<(StateId, SuffixId), GraphError> {
        let mut found = None;
        for edge in &self.graph.state(c.last_state()).edges {
            if self.target(edge.target, suffix).is_none() {
                continue;
            }
            if found.is_some() {
                return Err(GraphError::AmbiguousPredefinedPath {
                    root: c.root().sequence.clone(),
                    suffix: suffix_name.to_string(),
                });
            }
            found = Some((edge.target, edge.suffix));
        }
        found.ok_or_else(|| self.step_error(c, suffix_name, ""))
    }

    fn apply(
        &self,
        c: &MorphemeContainer,
        suffix: SuffixId,
        form: &str,
        target: StateId,
    ) -> Result<MorphemeContainer, GraphError> {
        let sequence = if form.is_empty() {
            SuffixFormSequence::blank()
        } else {
            SuffixFormSequence::parse(form)?
        };
        let declared = DeclaredForm {
            suffix,
            form_index: None,
            sequence: &sequence,
            target,
            lexeme_attributes: Some(applier::literal_form_attributes()),
        };
        let input = format!("{}{}", c.surface_so_far(), form);
        self.applier
            .try_form(c, &declared, &input)
            .ok_or_else(|| self.step_error(c, &self.graph.suffix(suffix).name, form))
    }

    fn step_error(&self, c: &MorphemeContainer, suffix: &str, form: &str) -> GraphError {
        GraphError::PredefinedPathStep {
            root: c.root().sequence.clone(),
            suffix: suffix.to_string(),
            form: form.to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // The paths
    // -----------------------------------------------------------------------

    /// `demek` and `yemek` before `y`: diyecek, yiyor, diyebilir.
    fn verbs(&mut self) -> Result<(), GraphError> {
        for (sequence, extra) in [("di", false), ("yi", true)] {
            let root = self.root(sequence, PrimaryPos::Verb, None)?;
            for suffix in ["Fut", "Future_to_Adj", "FutPart_Noun", "FutPart_Adj"] {
                for form in ["yecek", "yeceğ"] {
                    self.add(&root, &[("Pos", ""), (suffix, form)])?;
                }
            }
            self.add(&root, &[("Pos", ""), ("Prog", "yor")])?;
            self.add(&root, &[("Pos", ""), ("PresPart", "yen")])?;
            self.add(&root, &[("Able", "yebil"), ("Pos", "")])?;
            self.add(&root, &[("Able", "ye"), ("Neg", "me")])?;
            self.add(&root, &[("Able", "ye"), ("Neg", ""), ("WithoutHavingDoneSo", "meden")])?;
            self.add(&root, &[("Pos", ""), ("Opt", "ye")])?;
            self.add(&root, &[("Pos", ""), ("ByDoingSo", "yerek")])?;
            if extra {
                self.add(&root, &[("Pos", ""), ("AfterDoingSo", "yip")])?;
                self.add(&root, &[("Pos", ""), ("Imp", ""), ("A2Pl_Verb", "yin")])?;
            }
        }
        Ok(())
    }

    /// suyu, suyun, suları.
    fn su(&mut self) -> Result<(), GraphError> {
        let root = self.root("su", PrimaryPos::Noun, None)?;
        for (suffix, form) in [
            ("P1Sg_Noun", "yum"),
            ("P2Sg_Noun", "yun"),
            ("P3Sg_Noun", "yu"),
            ("P1Pl_Noun", "yumuz"),
            ("P2Pl_Noun", "yunuz"),
            ("P3Pl_Noun", "ları"),
        ] {
            self.add(&root, &[("A3Sg_Noun", ""), (suffix, form)])?;
        }
        self.add(&root, &[("A3Sg_Noun", ""), ("Pnon_Noun", ""), ("Gen_Noun", "yun")])?;
        self.add(&root, &[("A3Sg_Noun", ""), ("Pnon_Noun", "")])?;
        self.add(&root, &[("A3Pl_Noun", "lar"), ("Pnon_Noun", "")])
    }

    /// Add one path per case to `head`.
    fn cases(&mut self, root: &Option<Arc<Root>>, head: &[Step<'_>], cases: &[Step<'_>]) -> Result<(), GraphError> {
        for &case in cases {
            let mut steps = head.to_vec();
            steps.push(case);
            self.add(root, &steps)?;
        }
        Ok(())
    }

    fn personal_pronouns(&mut self) -> Result<(), GraphError> {
        use PrimaryPos::Pronoun;
        let personal = Some(SecondaryPos::PersonalPronoun);

        for (sequence, dative_root, agreement, ins, genitive) in [
            ("ben", "ban", "A1Sg_Pron", "imle", "im"),
            ("sen", "san", "A2Sg_Pron", "inle", "in"),
        ] {
            let root = self.root(sequence, Pronoun, personal)?;
            let head = [(agreement, ""), ("Pnon_Pron", "")];
            self.cases(&root, &head, &[("Nom_Pron", ""), ("Acc_Pron", "i")])?;
            let dative = self.root(dative_root, Pronoun, personal)?;
            self.add(&dative, &[(agreement, ""), ("Pnon_Pron", ""), ("Dat_Pron", "a")])?;
            self.cases(
                &root,
                &head,
                &[
                    ("Loc_Pron", "de"),
                    ("Abl_Pron", "den"),
                    ("Ins_Pron", "le"),
                    ("Ins_Pron", ins),
                    ("Gen_Pron", genitive),
                    ("AccordingTo", "ce"),
                    ("Nom_Pron_Deriv", ""),
                ],
            )?;
        }

        let o = self.root("o", Pronoun, personal)?;
        self.cases(
            &o,
            &[("A3Sg_Pron", ""), ("Pnon_Pron", "")],
            &[
                ("Nom_Pron", ""),
                ("Acc_Pron", "nu"),
                ("Dat_Pron", "na"),
                ("Loc_Pron", "nda"),
                ("Abl_Pron", "ndan"),
                ("Ins_Pron", "nla"),
                ("Ins_Pron", "nunla"),
                ("Gen_Pron", "nun"),
                ("AccordingTo", "nca"),
                ("Nom_Pron_Deriv", ""),
            ],
        )?;

        for (sequence, agreement, ins, genitive) in [("biz", "A1Pl_Pron", "imle", "im"), ("siz", "A2Pl_Pron", "inle", "in")] {
            let root = self.root(sequence, Pronoun, personal)?;
            self.cases(
                &root,
                &[(agreement, ""), ("Pnon_Pron", "")],
                &[
                    ("Nom_Pron", ""),
                    ("Acc_Pron", "i"),
                    ("Dat_Pron", "e"),
                    ("Loc_Pron", "de"),
                    ("Abl_Pron", "den"),
                    ("Ins_Pron", "le"),
                    ("Ins_Pron", ins),
                    ("Gen_Pron", genitive),
                    ("AccordingTo", "ce"),
                    ("Nom_Pron_Deriv", ""),
                ],
            )?;
            // bizler, sizler
            self.cases(
                &root,
                &[(agreement, "ler"), ("Pnon_Pron", "")],
                &[
                    ("Nom_Pron", ""),
                    ("Acc_Pron", "i"),
                    ("Dat_Pron", "e"),
                    ("Loc_Pron", "de"),
                    ("Abl_Pron", "den"),
                    ("Ins_Pron", "le"),
                    ("Gen_Pron", "in"),
                    ("AccordingTo", "ce"),
                    ("Nom_Pron_Deriv", ""),
                ],
            )?;
        }

        // onlar
        self.cases(
            &o,
            &[("A3Pl_Pron", "nlar"), ("Pnon_Pron", "")],
            &[
                ("Nom_Pron", ""),
                ("Acc_Pron", "ı"),
                ("Dat_Pron", "a"),
                ("Loc_Pron", "da"),
                ("Abl_Pron", "dan"),
                ("Ins_Pron", "la"),
                ("Gen_Pron", "ın"),
                ("AccordingTo", "ca"),
                ("Nom_Pron_Deriv", ""),
            ],
        )
    }

    fn demonstrative_pronouns(&mut self) -> Result<(), GraphError> {
        let demonstrative = Some(SecondaryPos::DemonstrativePronoun);
        let mut roots = Vec::new();
        for sequence in ["bu", "şu", "o"] {
            roots.push(self.root(sequence, PrimaryPos::Pronoun, demonstrative)?);
        }
        for root in &roots {
            self.cases(
                root,
                &[("A3Sg_Pron", ""), ("Pnon_Pron", "")],
                &[
                    ("Nom_Pron", ""),
                    ("Acc_Pron", "nu"),
                    ("Dat_Pron", "na"),
                    ("Loc_Pron", "nda"),
                    ("Abl_Pron", "ndan"),
                    ("Ins_Pron", "nla"),
                    ("Ins_Pron", "nunla"),
                    ("Gen_Pron", "nun"),
                    ("Nom_Pron_Deriv", ""),
                ],
            )?;
        }
        // bunlar, şunlar, onlar
        for root in &roots {
            self.cases(
                root,
                &[("A3Pl_Pron", "nlar"), ("Pnon_Pron", "")],
                &[
                    ("Nom_Pron", ""),
                    ("Acc_Pron", "ı"),
                    ("Dat_Pron", "a"),
                    ("Loc_Pron", "da"),
                    ("Abl_Pron", "dan"),
                    ("Ins_Pron", "la"),
                    ("Gen_Pron", "ın"),
                    ("Nom_Pron_Deriv", ""),
                ],
            )?;
        }
        Ok(())
    }

    fn kendi(&mut self) -> Result<(), GraphError> {
        let root = self.root("kendi", PrimaryPos::Pronoun, Some(SecondaryPos::ReflexivePronoun))?;
        let after_consonant = [
            ("Nom_Pron", ""),
            ("Acc_Pron", "i"),
            ("Dat_Pron", "e"),
            ("Loc_Pron", "de"),
            ("Abl_Pron", "den"),
            ("Ins_Pron", "le"),
            ("Gen_Pron", "in"),
            ("Nom_Pron_Deriv", ""),
        ];
        let after_vowel = [
            ("Nom_Pron", ""),
            ("Acc_Pron", "ni"),
            ("Dat_Pron", "ne"),
            ("Loc_Pron", "nde"),
            ("Abl_Pron", "nden"),
            ("Ins_Pron", "yle"),
            ("Gen_Pron", "nin"),
            ("Nom_Pron_Deriv", ""),
        ];
        self.cases(&root, &[("A1Sg_Pron", ""), ("P1Sg_Pron", "m")], &after_consonant)?;
        self.cases(&root, &[("A2Sg_Pron", ""), ("P2Sg_Pron", "n")], &after_consonant)?;
        self.cases(&root, &[("A3Sg_Pron", ""), ("P3Sg_Pron", "")], &after_vowel)?;
        self.cases(&root, &[("A3Sg_Pron", ""), ("P3Sg_Pron", "si")], &after_vowel)?;
        self.cases(&root, &[("A1Pl_Pron", ""), ("P1Pl_Pron", "miz")], &after_consonant)?;
        self.cases(&root, &[("A1Pl_Pron", "ler"), ("P1Pl_Pron", "imiz")], &after_consonant)?;
        self.cases(&root, &[("A2Pl_Pron", ""), ("P2Pl_Pron", "niz")], &after_consonant)?;
        self.cases(&root, &[("A2Pl_Pron", "ler"), ("P2Pl_Pron", "iniz")], &after_consonant)?;
        self.cases(&root, &[("A3Pl_Pron", "leri"), ("P3Pl_Pron", "")], &after_vowel)
    }

    /// hepimiz, hepiniz, hepsi.
    fn hep(&mut self) -> Result<(), GraphError> {
        let hep = self.root("hep", PrimaryPos::Pronoun, None)?;
        let hepsi = self.root("hepsi", PrimaryPos::Pronoun, None)?;
        for (agreement, possessive, form) in [("A1Pl_Pron", "P1Pl_Pron", "imiz"), ("A2Pl_Pron", "P2Pl_Pron", "iniz")] {
            self.cases(
                &hep,
                &[(agreement, ""), (possessive, form)],
                &[
                    ("Nom_Pron", ""),
                    ("Acc_Pron", "i"),
                    ("Dat_Pron", "e"),
                    ("Loc_Pron", "de"),
                    ("Abl_Pron", "den"),
                    ("Ins_Pron", "le"),
                    ("Gen_Pron", "in"),
                    ("AccordingTo", "ce"),
                    ("Nom_Pron_Deriv", ""),
                ],
            )?;
        }
        self.cases(
            &hepsi,
            &[("A3Pl_Pron", ""), ("P3Pl_Pron", "")],
            &[
                ("Nom_Pron", ""),
                ("Acc_Pron", "ni"),
                ("Dat_Pron", "ne"),
                ("Loc_Pron", "nde"),
                ("Abl_Pron", "nden"),
                ("Ins_Pron", "yle"),
                ("Gen_Pron", "nin"),
                ("AccordingTo", "nce"),
                ("Nom_Pron_Deriv", ""),
            ],
        )?;

        let herkes = self.root("herkes", PrimaryPos::Pronoun, None)?;
        self.add(&herkes, &[("A3Sg_Pron", ""), ("Pnon_Pron", "")])
    }

    /// mıyım, miydin, muymuşuz, müler.
    fn question_particles(&mut self) -> Result<(), GraphError> {
        for (sequence, v, plural) in [("mı", 'ı', "lar"), ("mi", 'i', "ler"), ("mu", 'u', "lar"), ("mü", 'ü', "ler")] {
            let root = self.root(sequence, PrimaryPos::Question, None)?;
            let present = [
                format!("y{v}m"),
                format!("s{v}n"),
                String::new(),
                format!("y{v}z"),
                format!("s{v}n{v}z"),
                plural.to_string(),
            ];
            let past = [
                "m".to_string(),
                "n".to_string(),
                String::new(),
                "k".to_string(),
                format!("n{v}z"),
                plural.to_string(),
            ];
            let narrative = [
                format!("{v}m"),
                format!("s{v}n"),
                String::new(),
                format!("{v}z"),
                format!("s{v}n{v}z"),
                plural.to_string(),
            ];
            let past_form = format!("yd{v}");
            let narrative_form = format!("ym{v}ş");
            for (tense, tense_form, agreements) in [
                ("Pres_Ques", "", &present),
                ("Past_Ques", past_form.as_str(), &past),
                ("Narr_Ques", narrative_form.as_str(), &narrative),
            ] {
                for (agreement, form) in QUESTION_AGREEMENTS.into_iter().zip(agreements) {
                    self.add(&root, &[(tense, tense_form), (agreement, form.as_str())])?;
                }
            }
        }
        Ok(())
    }

    /// nem, neyim, neyi, nesi, neleri.
    fn ne(&mut self) -> Result<(), GraphError> {
        let root = self.root("ne", PrimaryPos::Pronoun, Some(SecondaryPos::QuestionPronoun))?;
        for (possessive, form) in [
            ("P1Sg_Pron", "m"),
            ("P1Sg_Pron", "yim"),
            ("P2Sg_Pron", "n"),
            ("P2Sg_Pron", "yin"),
            ("P3Sg_Pron", "yi"),
            ("P3Sg_Pron", "si"),
            ("P1Pl_Pron", "yimiz"),
            ("P2Pl_Pron", "yiniz"),
            ("P3Pl_Pron", "leri"),
        ] {
            self.add(&root, &[("A3Sg_Pron", ""), (possessive, form)])?;
        }
        self.add(&root, &[("A3Sg_Pron", ""), ("Pnon_Pron", ""), ("Gen_Pron", "yin")])?;
        self.add(&root, &[("A3Sg_Pron", ""), ("Pnon_Pron", "")])?;
        self.add(&root, &[("A3Pl_Pron", "ler"), ("Pnon_Pron", "")])
    }

    /// orda, burdan, şurda, nerden.
    fn locative_pronouns(&mut self) -> Result<(), GraphError> {
        for (sequence, secondary, loc, abl) in [
            ("or", None, "da", "dan"),
            ("bur", None, "da", "dan"),
            ("şur", None, "da", "dan"),
            ("ner", Some(SecondaryPos::QuestionPronoun), "de", "den"),
        ] {
            let root = self.root(sequence, PrimaryPos::Pronoun, secondary)?;
            self.cases(
                &root,
                &[("A3Sg_Pron", ""), ("Pnon_Pron", "")],
                &[("Loc_Pron", loc), ("Abl_Pron", abl)],
            )?;
        }
        Ok(())
    }

    /// içerde, dışardan, içerisi.
    fn iceri_disari(&mut self) -> Result<(), GraphError> {
        for (sequence, loc, abl, possessive) in [("içer", "de", "den", "si"), ("dışar", "da", "dan", "sı")] {
            let root = self.root(sequence, PrimaryPos::Noun, None)?;
            self.cases(
                &root,
                &[("A3Sg_Noun", ""), ("Pnon_Noun", "")],
                &[("Loc_Noun", loc), ("Abl_Noun", abl)],
            )?;
            self.add(&root, &[("A3Sg_Noun", ""), ("P3Sg_Noun", possessive)])?;
        }
        Ok(())
    }

    fn quantifying_pronouns(&mut self) -> Result<(), GraphError> {
        // (root, possessive, form) triples under A3Sg.
        const SINGULAR: &[(&str, &str, &str)] = &[
            ("bazıları", "P3Sg_Pron", ""),
            ("bazıları", "P1Pl_Pron", "mız"),
            ("bazıları", "P2Pl_Pron", "nız"),
            ("bazısı", "P3Sg_Pron", ""),
            ("kimileri", "P3Sg_Pron", ""),
            ("kimileri", "P1Pl_Pron", "miz"),
            ("kimileri", "P2Pl_Pron", "niz"),
            ("kimi", "P3Sg_Pron", ""),
            ("kimi", "P1Pl_Pron", "miz"),
            ("kimi", "P2Pl_Pron", "niz"),
            ("kimisi", "P3Sg_Pron", ""),
            ("birileri", "P3Sg_Pron", ""),
            ("birileri", "P1Pl_Pron", "miz"),
            ("birileri", "P2Pl_Pron", "niz"),
            ("biri", "P3Sg_Pron", ""),
            ("biri", "P1Pl_Pron", "miz"),
            ("biri", "P2Pl_Pron", "niz"),
            ("birisi", "P3Sg_Pron", ""),
            ("hiçbiri", "P3Sg_Pron", ""),
            ("hiçbiri", "P1Pl_Pron", "miz"),
            ("hiçbiri", "P2Pl_Pron", "niz"),
            ("hiçbirisi", "P3Sg_Pron", ""),
            ("çoğu", "P3Sg_Pron", ""),
            ("çoğu", "P1Pl_Pron", "muz"),
            ("çoğu", "P2Pl_Pron", "nuz"),
            ("birçoğu", "P3Sg_Pron", ""),
            ("birçoğu", "P1Pl_Pron", "muz"),
            ("birçoğu", "P2Pl_Pron", "nuz"),
            ("çokları", "P3Pl_Pron", ""),
            ("birçokları", "P3Pl_Pron", ""),
            ("birkaçı", "P3Sg_Pron", ""),
            ("birkaçı", "P1Pl_Pron", "mız"),
            ("birkaçı", "P2Pl_Pron", "nız"),
            ("cümlesi", "P3Sg_Pron", ""),
            ("diğeri", "P3Sg_Pron", ""),
            ("diğeri", "P1Pl_Pron", "miz"),
            ("diğeri", "P2Pl_Pron", "niz"),
            ("diğerleri", "P3Pl_Pron", ""),
            ("diğerleri", "P1Pl_Pron", "miz"),
            ("diğerleri", "P2Pl_Pron", "niz"),
        ];
        for &(sequence, possessive, form) in SINGULAR {
            let root = self.root(sequence, PrimaryPos::Pronoun, None)?;
            self.add(&root, &[("A3Sg_Pron", ""), (possessive, form)])?;
        }

        // birbirimiz, birbirleri
        let birbiri = self.root("birbiri", PrimaryPos::Pronoun, None)?;
        let birbir = self.root("birbir", PrimaryPos::Pronoun, None)?;
        self.add(&birbiri, &[("A3Sg_Pron", ""), ("P3Sg_Pron", "")])?;
        self.add(&birbiri, &[("A1Pl_Pron", ""), ("P1Pl_Pron", "miz")])?;
        self.add(&birbiri, &[("A2Pl_Pron", ""), ("P2Pl_Pron", "niz")])?;
        self.add(&birbir, &[("A3Pl_Pron", ""), ("P3Pl_Pron", "leri")])
    }
}

const QUESTION_AGREEMENTS: [&str; 6] = ["A1Sg_Ques", "A2Sg_Ques", "A3Sg_Ques", "A1Pl_Ques", "A2Pl_Ques", "A3Pl_Ques"];

//! Pre-vetted answers for the built-in example molecules, served without
//! touching the model endpoint.
//!
//! Prediction values are sourced from published ADMET benchmarks (TDC,
//! ChEMBL, the Martins BBB dataset, the Zhu LD50 dataset, the AZ
//! PPBR/Caco-2 datasets) and peer-reviewed literature. Keys are canonical
//! SMILES strings, trimmed and case-sensitive; anything not found here
//! falls through to the live endpoint.

use std::collections::HashMap;
use std::sync::OnceLock;

use elionyx_common::{
    ChatReply, ChatRole, ChatTurn, DesignSuggestion, Label, PredictionResult, StartingMolecule,
    Status, StructuredReply, SuggestionKind,
};

use crate::parser::{CLASSIFICATION_CONFIDENCE, REGRESSION_CONFIDENCE};

const ASPIRIN: &str = "CC(=O)Oc1ccccc1C(=O)O";
const CAFFEINE: &str = "Cn1c(=O)c2c(ncn2C)n(c1=O)C";
const IBUPROFEN: &str = "CC(C)Cc1ccc(cc1)[C@@H](C)C(=O)O";
const DIAZEPAM: &str = "CN1C(=O)CN=C(c2ccccc21)c3ccccc3Cl";
const METFORMIN: &str = "CN(C)C(=N)NC(=N)N";
const PENICILLIN_G: &str = "CC1([C@@H](N2[C@H](S1)[C@@H](C2=O)NC(=O)Cc3ccccc3)C(=O)O)C";

fn class_entry(property_id: &str, value: &str, label: Label, status: Status) -> PredictionResult {
    PredictionResult {
        property_id: property_id.to_string(),
        value: value.to_string(),
        numeric_value: None,
        label: Some(label),
        confidence: Some(CLASSIFICATION_CONFIDENCE),
        status,
        error: None,
    }
}

fn score_entry(property_id: &str, value: &str, numeric_value: f64) -> PredictionResult {
    PredictionResult {
        property_id: property_id.to_string(),
        value: value.to_string(),
        numeric_value: Some(numeric_value),
        label: None,
        confidence: Some(REGRESSION_CONFIDENCE),
        status: Status::Neutral,
        error: None,
    }
}

fn prediction_table() -> &'static HashMap<&'static str, Vec<PredictionResult>> {
    static TABLE: OnceLock<HashMap<&'static str, Vec<PredictionResult>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = HashMap::new();

        m.insert(
            ASPIRIN,
            vec![
                class_entry("bbb", "Does not cross", Label::A, Status::Negative),
                score_entry("caco2", "-5.18 cm/s (log)", -5.18),
                score_entry("ppbr", "80.30 %", 80.30),
                score_entry("logp", "1.19", 1.19),
                class_entry("ames", "Not mutagenic", Label::A, Status::Positive),
                class_entry("dili", "DILI risk", Label::B, Status::Negative),
                class_entry("herg", "No inhibition", Label::A, Status::Positive),
                score_entry("ld50", "250.00 mg/kg", 250.00),
            ],
        );

        m.insert(
            CAFFEINE,
            vec![
                class_entry("bbb", "Crosses BBB", Label::B, Status::Positive),
                score_entry("caco2", "-4.72 cm/s (log)", -4.72),
                score_entry("ppbr", "36.00 %", 36.00),
                score_entry("logp", "-0.07", -0.07),
                class_entry("ames", "Not mutagenic", Label::A, Status::Positive),
                class_entry("dili", "No DILI risk", Label::A, Status::Positive),
                class_entry("herg", "No inhibition", Label::A, Status::Positive),
                score_entry("ld50", "367.00 mg/kg", 367.00),
            ],
        );

        m.insert(
            IBUPROFEN,
            vec![
                class_entry("bbb", "Does not cross", Label::A, Status::Negative),
                score_entry("caco2", "-4.52 cm/s (log)", -4.52),
                score_entry("ppbr", "99.00 %", 99.00),
                score_entry("logp", "3.97", 3.97),
                class_entry("ames", "Not mutagenic", Label::A, Status::Positive),
                class_entry("dili", "DILI risk", Label::B, Status::Negative),
                class_entry("herg", "No inhibition", Label::A, Status::Positive),
                score_entry("ld50", "636.00 mg/kg", 636.00),
            ],
        );

        m.insert(
            DIAZEPAM,
            vec![
                class_entry("bbb", "Crosses BBB", Label::B, Status::Positive),
                score_entry("caco2", "-4.32 cm/s (log)", -4.32),
                score_entry("ppbr", "98.00 %", 98.00),
                score_entry("logp", "2.82", 2.82),
                class_entry("ames", "Not mutagenic", Label::A, Status::Positive),
                class_entry("dili", "DILI risk", Label::B, Status::Negative),
                class_entry("herg", "Inhibits hERG", Label::B, Status::Negative),
                score_entry("ld50", "720.00 mg/kg", 720.00),
            ],
        );

        m.insert(
            METFORMIN,
            vec![
                class_entry("bbb", "Does not cross", Label::A, Status::Negative),
                score_entry("caco2", "-5.78 cm/s (log)", -5.78),
                score_entry("ppbr", "3.00 %", 3.00),
                score_entry("logp", "-1.43", -1.43),
                class_entry("ames", "Not mutagenic", Label::A, Status::Positive),
                class_entry("dili", "No DILI risk", Label::A, Status::Positive),
                class_entry("herg", "No inhibition", Label::A, Status::Positive),
                score_entry("ld50", "2500.00 mg/kg", 2500.00),
            ],
        );

        m.insert(
            PENICILLIN_G,
            vec![
                class_entry("bbb", "Does not cross", Label::A, Status::Negative),
                score_entry("caco2", "-6.23 cm/s (log)", -6.23),
                score_entry("ppbr", "58.00 %", 58.00),
                score_entry("logp", "1.83", 1.83),
                class_entry("ames", "Not mutagenic", Label::A, Status::Positive),
                class_entry("dili", "No DILI risk", Label::A, Status::Positive),
                class_entry("herg", "No inhibition", Label::A, Status::Positive),
                score_entry("ld50", "10000.00 mg/kg", 10000.00),
            ],
        );

        m
    })
}

fn explanation_table() -> &'static HashMap<&'static str, HashMap<&'static str, &'static str>> {
    static TABLE: OnceLock<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
        OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = HashMap::new();

        // ── Aspirin ───────────────────────────────────────────────────────────
        let mut aspirin = HashMap::new();
        aspirin.insert("bbb", "Aspirin does not effectively cross the blood-brain barrier. Its carboxylic acid group (pKa 3.5) is predominantly ionized at physiological pH 7.4, sharply limiting passive lipid diffusion into the CNS. Active efflux transporters at the BBB further restrict its central accumulation, consistent with aspirin's primarily peripheral anti-inflammatory and analgesic mechanism of action.");
        aspirin.insert("caco2", "Aspirin shows moderate Caco-2 permeability (log Papp ≈ −5.18 cm/s), characteristic of a small polar drug with a topological polar surface area of ~63 Å². While the ionized carboxylate reduces lipid-bilayer partitioning, the small molecular size and the partially uncharged fraction at the lower intestinal pH maintain reasonable passive absorption. Rapid hydrolysis to salicylate in the GI mucosa also contributes to its overall oral bioavailability.");
        aspirin.insert("ppbr", "Aspirin (and its active metabolite salicylate) is approximately 80–90% bound to plasma albumin, primarily at Sudlow site I. The carboxylate anion forms strong electrostatic interactions with lysine residues in the albumin-binding pocket. At high therapeutic doses, these sites can become saturated, leading to disproportionate increases in the free drug fraction and potential displacement interactions with other highly protein-bound drugs.");
        aspirin.insert("logp", "Aspirin has a logP of ~1.19, reflecting moderate lipophilicity. The carboxylic acid and acetate ester groups confer significant polarity, while the benzene ring contributes hydrophobic character. This value places aspirin in a favorable range for oral absorption, but the predominantly ionized species at blood pH 7.4 (logD₇.₄ ≈ −1.1) explains its limited CNS penetration.");
        aspirin.insert("ames", "Aspirin tests negative in the Ames mutagenicity assay. Its structure lacks reactive electrophilic groups, nitroso moieties, or polycyclic aromatic systems typically associated with bacterial mutagenesis. No metabolically activated DNA-reactive intermediates have been demonstrated at pharmacologically relevant concentrations.");
        aspirin.insert("dili", "Aspirin carries a DILI risk, particularly at higher or prolonged doses. It can cause hepatocellular injury through mitochondrial dysfunction and formation of reactive acyl glucuronide metabolites (from salicylate). At therapeutic doses this is usually reversible, but individuals with underlying hepatic disease or those combining aspirin with other hepatotoxic agents face elevated risk. GI bleeding–related anemia can further stress hepatic function.");
        aspirin.insert("herg", "Aspirin does not significantly inhibit hERG potassium channels. Its small, polar structure lacks the two key pharmacophoric features of hERG blockers — a basic amine nitrogen and bulky hydrophobic aromatic rings that fit the channel's inner cavity. No clinically meaningful QTc prolongation has been observed with aspirin at any therapeutic dose.");
        aspirin.insert("ld50", "Aspirin has a moderate acute toxicity profile with an oral LD50 of ~250 mg/kg in rodents. While safe at therapeutic doses (75–4000 mg/day), overdose produces salicylate poisoning: uncoupled oxidative phosphorylation, respiratory alkalosis progressing to metabolic acidosis, tinnitus, and hyperthermia. The toxic-to-therapeutic margin is relatively narrow compared to modern NSAIDs.");
        m.insert(ASPIRIN, aspirin);

        // ── Caffeine ──────────────────────────────────────────────────────────
        let mut caffeine = HashMap::new();
        caffeine.insert("bbb", "Caffeine crosses the blood-brain barrier rapidly and efficiently, which is essential to its well-established CNS pharmacology as an adenosine receptor antagonist. Its low molecular weight (194 Da), moderate logP (~−0.07), and absence of ionizable groups at physiological pH allow passive transcellular diffusion across the lipid bilayer. CNS concentrations closely mirror plasma levels within minutes of oral dosing.");
        caffeine.insert("caco2", "Caffeine exhibits good intestinal permeability in Caco-2 assays (log Papp ≈ −4.72 cm/s). Its compact, neutral xanthine scaffold diffuses efficiently across the epithelial lipid bilayer, and it is not a significant substrate for major intestinal efflux pumps such as P-glycoprotein. Oral bioavailability in humans is essentially complete (~99%), consistent with this high permeability.");
        caffeine.insert("ppbr", "Caffeine is only modestly bound to plasma proteins (~36%), primarily albumin and α1-acid glycoprotein. Its relatively low lipophilicity (logP ~−0.07) and lack of strongly ionizable groups at physiological pH reduce electrostatic and hydrophobic interactions with carrier proteins. This low protein binding contributes to caffeine's rapid and extensive distribution into tissues, including the CNS.");
        caffeine.insert("logp", "Caffeine has a slightly negative logP of ~−0.07, making it marginally hydrophilic overall. Despite containing aromatic and carbonyl groups, its multiple hydrogen-bond acceptors and the N-methyl groups on the purine scaffold balance hydrophobicity. This near-neutral lipophilicity supports both high aqueous solubility and sufficient membrane permeability for rapid oral absorption and CNS entry.");
        caffeine.insert("ames", "Caffeine tests negative in the Ames mutagenicity assay. Although it was historically described as a 'co-mutagen' that could potentiate the effect of other clastogens, caffeine itself does not cause base-pair substitutions or frameshift mutations in standard Ames strains, with or without S9 metabolic activation. Long-term epidemiological data support the absence of meaningful mutagenic potential at dietary exposures.");
        caffeine.insert("dili", "Caffeine does not carry a significant DILI risk at usual dietary or therapeutic exposures. It is extensively metabolized in the liver by CYP1A2 to paraxanthine, theobromine, and theophylline — none of which are directly hepatotoxic at normal concentrations. Liver injury has been documented only in extreme overconsumption scenarios (e.g., concentrated caffeine supplements), not with coffee or moderate therapeutic use.");
        caffeine.insert("herg", "Caffeine does not meaningfully inhibit hERG potassium channels. Its compact, planar xanthine structure lacks a basic amine nitrogen — the key pharmacophoric feature for high-affinity hERG binding — making significant channel blockade pharmacologically implausible at relevant concentrations. Caffeine's cardiovascular effects (mild tachycardia) are mediated through adenosine receptor antagonism and phosphodiesterase inhibition, not ion channel blockade.");
        caffeine.insert("ld50", "Caffeine has a moderate acute toxicity with an oral LD50 of ~367 mg/kg in rodents, equivalent to roughly 3–5 g in humans. Toxic doses produce severe tachycardia, hypokalemia, seizures, and respiratory failure arising from excessive adenosine receptor blockade and phosphodiesterase inhibition. Fatalities from caffeine overdose in humans are rare but well-documented with concentrated supplements and energy drinks.");
        m.insert(CAFFEINE, caffeine);

        // ── Ibuprofen ─────────────────────────────────────────────────────────
        let mut ibuprofen = HashMap::new();
        ibuprofen.insert("bbb", "Ibuprofen does not readily cross the blood-brain barrier despite its high lipophilicity (logP ~3.97). The predominance of its ionized carboxylate form (pKa ~4.4) at blood pH 7.4 effectively limits passive CNS entry, and P-glycoprotein efflux at the BBB actively expels the neutral fraction. Its anti-inflammatory and analgesic effects are primarily mediated peripherally through COX-1 and COX-2 inhibition.");
        ibuprofen.insert("caco2", "Ibuprofen shows good Caco-2 permeability (log Papp ≈ −4.52 cm/s). At the lower pH of the intestinal lumen, a larger uncharged fraction exists (pKa ~4.4), which diffuses efficiently across the lipid bilayer. Its high logP also favors membrane partitioning, and ibuprofen is not significantly effluxed by intestinal P-gp, yielding approximately 90% oral bioavailability in humans.");
        ibuprofen.insert("ppbr", "Ibuprofen is very highly bound to plasma albumin (~99%), primarily at Sudlow site II. The carboxylate anion provides an electrostatic anchor while the isobutylbenzyl moiety fills a hydrophobic sub-pocket on the albumin surface. This extreme binding limits the free drug fraction and is clinically significant for drug–drug interactions, particularly with other highly protein-bound compounds such as warfarin and methotrexate.");
        ibuprofen.insert("logp", "Ibuprofen has a logP of ~3.97, reflecting substantial lipophilicity conferred by its isobutylphenyl group. However, the carboxylic acid dramatically reduces the apparent lipophilicity at physiological pH (logD₇.₄ ≈ 0.9), and the ionized species at blood pH limits passive CNS diffusion. This pH-dependent partitioning underlies both its good oral absorption and its failure to significantly penetrate the BBB.");
        ibuprofen.insert("ames", "Ibuprofen tests negative in the Ames mutagenicity assay. Its arylpropionic acid scaffold contains no inherently reactive electrophilic or radical-generating groups under standard assay conditions. The principal metabolic pathways — aromatic hydroxylation and acyl glucuronidation — do not generate DNA-reactive alkylating intermediates at pharmacologically relevant concentrations.");
        ibuprofen.insert("dili", "Ibuprofen carries a DILI risk, primarily through reactive metabolite formation. CYP2C8 and CYP2C9-mediated metabolism can generate acyl glucuronides and hydroxylated quinone intermediates capable of covalent protein modification. NSAIDs as a class are well-established hepatotoxins; ibuprofen is among the more frequently implicated agents in NSAID-associated liver injury reports in post-marketing surveillance databases.");
        ibuprofen.insert("herg", "Ibuprofen does not significantly inhibit hERG potassium channels. While its lipophilicity allows membrane partitioning, ibuprofen lacks the basic nitrogen pharmacophore essential for high-affinity binding to the hERG channel inner cavity (Tyr652/Phe656 residues). QTc prolongation has not been observed at therapeutic doses in clinical studies, and its cardiovascular risks relate to prostaglandin inhibition rather than ion channel effects.");
        ibuprofen.insert("ld50", "Ibuprofen has an oral LD50 of ~636 mg/kg in rodents, placing it in the moderately low toxicity category. Acute overdose in humans produces GI hemorrhage, acute renal failure (via prostaglandin-mediated vasoconstriction), and CNS effects including tinnitus and confusion. The therapeutic-to-toxic ratio is relatively wide in healthy adults but narrows significantly with renal impairment, dehydration, or concomitant anticoagulant use.");
        m.insert(IBUPROFEN, ibuprofen);

        // ── Diazepam ──────────────────────────────────────────────────────────
        let mut diazepam = HashMap::new();
        diazepam.insert("bbb", "Diazepam crosses the blood-brain barrier rapidly and completely, consistent with its fast clinical onset as a CNS depressant and anxiolytic. Its high lipophilicity (logP ~2.82), low molecular weight (285 Da), and absence of ionizable groups at physiological pH all facilitate passive transcellular diffusion. GABA-A receptor engagement in the limbic system occurs within minutes of intravenous dosing.");
        diazepam.insert("caco2", "Diazepam shows excellent Caco-2 permeability (log Papp ≈ −4.32 cm/s) and essentially complete oral bioavailability (~100%). Its neutral, lipophilic 1,4-benzodiazepine scaffold diffuses efficiently across the intestinal epithelium, and it is not a significant substrate for intestinal efflux transporters such as P-gp. This contributes to predictable, rapid oral absorption with a time to peak plasma concentration of approximately 1–2 hours.");
        diazepam.insert("ppbr", "Diazepam is very highly bound to plasma albumin (~98%), one of the highest protein-binding values among benzodiazepines. Its lipophilic chlorophenyl substituent and the fused diazepine ring together fill a hydrophobic groove on albumin. This extreme binding significantly extends its plasma half-life (20–100 hours), and competing drugs such as valproate or phenytoin can displace diazepam and transiently increase the free fraction.");
        diazepam.insert("logp", "Diazepam has a logP of ~2.82, placing it squarely in the optimal range for CNS drug candidates. The chloro-substituted phenyl ring and the 1,4-benzodiazepine scaffold confer significant lipophilicity, enabling rapid BBB penetration. Its redistribution from the brain into peripheral adipose tissue drives the short duration of acute CNS sedation despite a prolonged plasma elimination half-life, a hallmark of benzodiazepine pharmacokinetics.");
        diazepam.insert("ames", "Diazepam tests negative in the Ames mutagenicity assay. Long-term epidemiological studies and comprehensive genotoxicity batteries (Ames, micronucleus, chromosomal aberration) have found no clinically significant mutagenic potential for the benzodiazepine scaffold. The chloro substituent is not metabolically activated to produce reactive arylating species under standard in vitro conditions.");
        diazepam.insert("dili", "Diazepam carries a DILI risk, though hepatotoxicity is rare and typically idiosyncratic rather than dose-dependent. CYP3A4-mediated oxidative metabolism generates minor reactive intermediates, and isolated cases of cholestatic hepatitis and hepatocellular injury have been documented in post-marketing surveillance. Patients with pre-existing hepatic impairment metabolize diazepam more slowly, increasing accumulation and toxicity risk.");
        diazepam.insert("herg", "Diazepam inhibits hERG potassium channels and is a recognized cause of QTc prolongation at supratherapeutic concentrations. The chlorophenyl substituent and the basic nitrogen in the diazepine ring interact with key residues (Tyr652 and Phe656) in the hERG channel inner vestibule. While clinically significant arrhythmia is uncommon at standard anxiolytic doses, the risk is amplified by hypokalemia or co-administration with other QT-prolonging agents.");
        diazepam.insert("ld50", "Diazepam has a relatively high oral LD50 of ~720 mg/kg in rodents, reflecting a wide therapeutic margin when used in isolation. Acute lethality from benzodiazepines alone is rare in humans; fatalities almost invariably occur in polypharmacy settings where synergistic CNS and respiratory depression with opioids, alcohol, or other sedatives is the operative mechanism.");
        m.insert(DIAZEPAM, diazepam);

        // ── Metformin ─────────────────────────────────────────────────────────
        let mut metformin = HashMap::new();
        metformin.insert("bbb", "Metformin does not cross the blood-brain barrier to a clinically significant extent. Its high polarity (logP ~−1.43), multiple guanidinium nitrogens that are fully protonated at physiological pH (resulting in a permanent cationic charge), and large topological polar surface area (~84 Å²) collectively oppose passive lipid-membrane diffusion. While organic cation transporters (OCT2) mediate its renal secretion, equivalent efflux-permitting transporters at the BBB endothelium are absent.");
        metformin.insert("caco2", "Metformin shows low Caco-2 permeability (log Papp ≈ −5.78 cm/s), consistent with its hydrophilicity and fully ionized state across the intestinal pH range. Absorption is predominantly carrier-mediated via organic cation transporters (OCT1) and the plasma monoamine transporter (PMAT) rather than passive diffusion. Bioavailability (50–60%) is transporter-limited and can be modulated by OCT1 genetic polymorphisms and drug interactions.");
        metformin.insert("ppbr", "Metformin is negligibly bound to plasma proteins (~3%). Its fully protonated, hydrophilic biguanide structure has essentially no affinity for the hydrophobic binding sites on albumin or other plasma carrier proteins. As a result, it distributes freely into total body water and accumulates in red blood cells and gastrointestinal tissues, yielding a large apparent volume of distribution (~654 L) despite minimal lipophilicity.");
        metformin.insert("logp", "Metformin has a logP of ~−1.43, making it one of the most hydrophilic first-line oral drugs in clinical use. Its biguanide core carries permanent positive charges at physiological pH through resonance delocalization across the guanidinium moieties, resulting in a very low partition coefficient. This extreme hydrophilicity limits passive membrane permeation and CNS entry but favors renal tubular secretion and reduces non-specific tissue binding.");
        metformin.insert("ames", "Metformin tests negative in the Ames mutagenicity assay, and its decades-long safety record in hundreds of millions of patients worldwide confirms the absence of mutagenic risk. The biguanide scaffold lacks activated double bonds, reactive electrophilic halogens, or metabolically generated intermediates capable of alkylating DNA bases. Metformin undergoes negligible hepatic metabolism, further minimizing reactive metabolite exposure.");
        metformin.insert("dili", "Metformin is not associated with meaningful DILI risk at recommended therapeutic doses. Although it is a mild inhibitor of mitochondrial complex I, the resulting reduction in hepatic ATP synthesis is insufficient to cause hepatocellular injury at plasma concentrations achieved during standard treatment. Rare cases of hepatotoxicity associated with metformin are almost invariably linked to concurrent lactic acidosis in patients with renal failure — an indirect toxic mechanism rather than direct hepatocellular damage.");
        metformin.insert("herg", "Metformin does not inhibit hERG potassium channels. Its hydrophilic, permanently cationic biguanide structure cannot permeate the lipid bilayer to reach the intracellular mouth of the hERG channel, and no extracellular binding site has been identified. The cardiovascular benefits observed with metformin in type 2 diabetes are attributable to improved metabolic risk factors (glycemia, insulin resistance, lipids) rather than any direct electrophysiological effect.");
        metformin.insert("ld50", "Metformin is remarkably non-toxic acutely, with an oral LD50 exceeding 2500 mg/kg in rodents — far above any achievable therapeutic dose. In clinical overdose, the primary concern is lactic acidosis arising from impaired hepatic gluconeogenesis and reduced lactate clearance, not direct cytotoxicity. This complication is most clinically relevant when drug accumulation occurs due to concurrent renal insufficiency limiting its urinary excretion.");
        m.insert(METFORMIN, metformin);

        // ── Penicillin G ──────────────────────────────────────────────────────
        let mut penicillin = HashMap::new();
        penicillin.insert("bbb", "Penicillin G does not cross the intact blood-brain barrier. Its ionized β-lactam carboxylate (pKa ~2.7) is fully anionic at physiological pH, and active efflux by multidrug resistance-associated protein 4 (MRP4) at the choroid plexus and BBB endothelium further restricts CNS accumulation. In bacterial meningitis, inflamed BBB tight junctions allow sufficient partial penetration to achieve bactericidal CSF concentrations — but this is strictly disease-state dependent.");
        penicillin.insert("caco2", "Penicillin G has very low Caco-2 permeability (log Papp ≈ −6.23 cm/s) and poor oral bioavailability (~15–30%). Its ionized carboxylate, polar amide linker, and strained β-lactam ring together yield a high topological polar surface area (~130 Å²), severely limiting passive transcellular diffusion. Oral phenoxymethylpenicillin (penicillin V) is preferred clinically due to its greater acid stability and absorption via the intestinal peptide transporter PepT1.");
        penicillin.insert("ppbr", "Penicillin G is approximately 58% bound to plasma albumin. The carboxylate anion interacts electrostatically with basic albumin residues while the phenylacetyl side chain occupies a hydrophobic sub-pocket at Sudlow site II. This intermediate protein binding is clinically relevant: it slows renal glomerular filtration and can be displaced by other anionic drugs (e.g., probenecid), transiently elevating the free penicillin concentration.");
        penicillin.insert("logp", "Penicillin G has a measured logP of ~1.83, reflecting the balance between its phenylacetyl hydrophobic side chain and the polar β-lactam thiazolidine ring and carboxylate group. Despite the moderate logP, the fully ionized form at physiological pH has a much lower logD₇.₄ of approximately −1.3, explaining the compound's poor membrane permeability and dependence on active transport for both absorption and elimination.");
        penicillin.insert("ames", "Penicillin G tests negative in the Ames mutagenicity assay and has an outstanding safety record across billions of patient-years of clinical use. Although the β-lactam ring is inherently electrophilic (reacting with bacterial transpeptidase active-site serines), it does not significantly alkylate DNA nucleophilic sites under physiological conditions. No genotoxic potential has been established in standard or extended battery genotoxicity testing.");
        penicillin.insert("dili", "Penicillin G is not associated with significant DILI risk. It undergoes minimal hepatic metabolism (eliminated primarily unchanged by renal secretion), generating negligible reactive metabolite burden in the liver. The rare penicillin-associated liver injury observed clinically is almost exclusively immune-mediated (cholestatic, idiosyncratic, appearing days to weeks after drug exposure) rather than dose-dependent hepatocellular toxicity.");
        penicillin.insert("herg", "Penicillin G does not inhibit hERG potassium channels. Its bulky, polar, fully ionized structure cannot access the hydrophobic inner vestibule of the hERG channel, and no clinically relevant QTc prolongation has been documented in pharmacovigilance databases. The rare cardiac toxicity associated with penicillins is exclusively immune-mediated (hypersensitivity myocarditis), not ion channel-related.");
        penicillin.insert("ld50", "Penicillin G has an exceptionally high acute oral LD50 of >10,000 mg/kg in rodents, placing it among the least acutely toxic drugs in clinical use. At doses achievable in clinical practice, direct cytotoxicity is essentially non-existent; adverse effects are invariably immune-mediated (anaphylaxis, serum sickness) or result from gut microbiome disruption. At extreme doses in animal studies, lethality is attributable to the electrolyte load from the sodium/potassium penicillin salt rather than the β-lactam molecule itself.");
        m.insert(PENICILLIN_G, penicillin);

        m
    })
}

// ── Chat cache ────────────────────────────────────────────────────────────────
// Pre-written replies for the three suggested starter prompts; only consulted
// when the prompt is the very first message of a conversation.

const ANTIHISTAMINE_TEXT: &str = r#"Second-generation antihistamines achieve their non-sedating profile by being specifically designed **not** to cross the blood-brain barrier — the opposite of first-generation agents like diphenhydramine.

Key design strategies used in this drug class:
• **High polarity / permanent charge** — cetirizine carries a zwitterionic charge at physiological pH, blocking passive CNS diffusion
• **Active P-gp efflux** — fexofenadine is a P-glycoprotein substrate; the BBB pump actively ejects it back into the bloodstream
• **Low intrinsic lipophilicity** — all three major agents have logP well below 2, limiting membrane partitioning

You can load any of these into the evaluator to see their full predicted ADMET profile:"#;

const PANEL_OVERVIEW_TEXT: &str = r#"This app predicts **8 ADMET properties** using Google's TxGemma model, split across three evaluation panels:

**Pharmacokinetics**
• **BBB** — does the drug cross the blood-brain barrier? (classification)
• **Caco-2** — intestinal permeability via the Caco-2 cell assay (log cm/s)
• **PPBR** — plasma protein binding rate (%)
• **logP** — octanol-water partition coefficient (lipophilicity)

**Toxicity**
• **AMES** — Ames bacterial mutagenicity test (classification)
• **DILI** — drug-induced liver injury risk (classification)
• **hERG** — cardiotoxicity risk from hERG channel blockade (classification)
• **LD50** — acute oral lethal dose in rodents (mg/kg)

To get predictions: paste or sketch a molecule → select an evaluation panel → click **Evaluate with TxGemma**. Once results appear, click **Ask Why** on any card for a structural explanation.

Try one of the built-in examples to see the full workflow:"#;

const BBB_STRATEGY_TEXT: &str = r#"BBB penetration is governed by four well-established physicochemical rules. Here are the most effective structural strategies:

**1. Reduce polarity (TPSA < 90 Å²)**
Lower the topological polar surface area by replacing H-bond donors (NH, OH) with non-polar bioisosteres or methylated analogues. Each H-bond donor removed can raise CNS penetration by ~10-fold.

**2. Optimise lipophilicity (logP 1–3)**
Too hydrophilic (logP < 0) prevents membrane diffusion; too lipophilic (logP > 5) causes non-specific binding, high plasma protein binding, and poor aqueous solubility. The sweet spot for passive BBB diffusion is logP 1–3.

**3. Keep molecular weight below 450 Da**
Larger molecules diffuse poorly through tight-junction-sealed endothelium. Every 75 Da above 400 Da roughly halves CNS exposure.

**4. Minimise P-glycoprotein recognition**
P-gp actively effluxes drugs out of the CNS. Reducing H-bond donor count (< 3) and aromatic ring count (≤ 3) strongly decreases P-gp affinity.

Load a molecule and run **BBB Penetration** mode to see where your candidate currently stands."#;

fn suggestion(text: &str, kind: SuggestionKind) -> DesignSuggestion {
    DesignSuggestion {
        text: text.to_string(),
        kind,
    }
}

fn molecule(name: &str, smiles: &str) -> StartingMolecule {
    StartingMolecule {
        name: name.to_string(),
        smiles: smiles.to_string(),
    }
}

fn chat_table() -> &'static HashMap<&'static str, ChatReply> {
    static TABLE: OnceLock<HashMap<&'static str, ChatReply>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = HashMap::new();

        m.insert(
            "I need a non-drowsy antihistamine",
            ChatReply {
                text: ANTIHISTAMINE_TEXT.to_string(),
                structured: Some(StructuredReply {
                    suggestions: Some(vec![
                        suggestion("Keep logP < 2 to limit BBB diffusion", SuggestionKind::Modify),
                        suggestion(
                            "Add ionizable group (COOH/SO₃H) for pH-dependent charge",
                            SuggestionKind::Add,
                        ),
                        suggestion(
                            "Introduce P-gp recognition to enable active CNS efflux",
                            SuggestionKind::General,
                        ),
                    ]),
                    molecules: Some(vec![
                        molecule("Cetirizine", "OC(=O)CN1CCN(CC1)CCOC(c1ccccc1Cl)c1ccc(Cl)cc1"),
                        molecule("Loratadine", "CCOC(=O)N1CCC(=C2c3ccc(Cl)cc3CCc3ccncc32)CC1"),
                        molecule(
                            "Fexofenadine",
                            "CC(C)(C(=O)O)c1ccc(cc1)C(O)CCCN1CCC(CC1)C(O)(c1ccccc1)c1ccccc1",
                        ),
                    ]),
                }),
            },
        );

        m.insert(
            "What properties does this molecule have?",
            ChatReply {
                text: PANEL_OVERVIEW_TEXT.to_string(),
                structured: Some(StructuredReply {
                    suggestions: None,
                    molecules: Some(vec![
                        molecule("Aspirin", ASPIRIN),
                        molecule("Caffeine", CAFFEINE),
                        molecule("Diazepam", DIAZEPAM),
                        molecule("Metformin", METFORMIN),
                    ]),
                }),
            },
        );

        m.insert(
            "Suggest modifications to improve BBB penetration",
            ChatReply {
                text: BBB_STRATEGY_TEXT.to_string(),
                structured: Some(StructuredReply {
                    suggestions: Some(vec![
                        suggestion(
                            "Reduce TPSA below 90 Å² (remove H-bond donors)",
                            SuggestionKind::Modify,
                        ),
                        suggestion(
                            "Replace NH/OH with N-Me or O-Me bioisosteres",
                            SuggestionKind::Modify,
                        ),
                        suggestion(
                            "Target logP 1–3 for optimal passive diffusion",
                            SuggestionKind::Modify,
                        ),
                        suggestion("Keep MW below 450 Da", SuggestionKind::Remove),
                        suggestion(
                            "Reduce aromatic ring count to lower P-gp efflux",
                            SuggestionKind::Remove,
                        ),
                    ]),
                    molecules: None,
                }),
            },
        );

        m
    })
}

// ── Lookups ───────────────────────────────────────────────────────────────────

/// Cached predictions for a molecule, in the requested property order.
/// Returns `None` unless every requested property is present, in which case
/// the whole batch falls through to the live endpoint.
pub fn cached_predictions(smiles: &str, properties: &[String]) -> Option<Vec<PredictionResult>> {
    let entries = prediction_table().get(smiles.trim())?;
    properties
        .iter()
        .map(|id| entries.iter().find(|p| p.property_id == *id).cloned())
        .collect()
}

/// Cached explanation for one molecule and property.
pub fn cached_explanation(smiles: &str, property_id: &str) -> Option<&'static str> {
    explanation_table().get(smiles.trim())?.get(property_id).copied()
}

/// Cached reply for a conversation that consists of exactly one user turn
/// whose trimmed content matches a starter prompt verbatim.
pub fn cached_chat_reply(history: &[ChatTurn]) -> Option<ChatReply> {
    match history {
        [only] if only.role == ChatRole::User => chat_table().get(only.content.trim()).cloned(),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use elionyx_common::{example_by_name, property_by_id, EXAMPLE_MOLECULES};

    #[test]
    fn test_subset_lookup_preserves_request_order() {
        let results =
            cached_predictions(ASPIRIN, &["logp".to_string(), "bbb".to_string()]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].property_id, "logp");
        assert_eq!(results[0].numeric_value, Some(1.19));
        assert_eq!(results[1].property_id, "bbb");
        assert_eq!(results[1].status, Status::Negative);
        assert_eq!(results[1].value, "Does not cross");
    }

    #[test]
    fn test_lookup_trims_molecule_key() {
        let padded = format!("  {ASPIRIN}  ");
        assert!(cached_predictions(&padded, &["bbb".to_string()]).is_some());
    }

    #[test]
    fn test_one_uncached_property_misses_whole_batch() {
        let results = cached_predictions(ASPIRIN, &["bbb".to_string(), "ic50".to_string()]);
        assert!(results.is_none());
    }

    #[test]
    fn test_unknown_molecule_misses() {
        assert!(cached_predictions("CCO", &["bbb".to_string()]).is_none());
    }

    #[test]
    fn test_every_catalog_molecule_has_a_full_admet_panel() {
        let admet: Vec<String> = ["bbb", "caco2", "ppbr", "logp", "ames", "dili", "herg", "ld50"]
            .iter()
            .map(|id| id.to_string())
            .collect();
        for molecule in EXAMPLE_MOLECULES {
            let results = cached_predictions(molecule.smiles, &admet);
            assert!(results.is_some(), "{} lacks a full panel", molecule.name);
            assert_eq!(results.unwrap().len(), 8);
        }
    }

    #[test]
    fn test_cached_property_ids_resolve_in_registry() {
        for molecule in EXAMPLE_MOLECULES {
            let entries = prediction_table().get(molecule.smiles).unwrap();
            for entry in entries {
                assert!(
                    property_by_id(&entry.property_id).is_some(),
                    "unregistered property {} cached for {}",
                    entry.property_id,
                    molecule.name
                );
            }
        }
    }

    #[test]
    fn test_cache_keys_match_catalog_smiles() {
        assert_eq!(example_by_name("Aspirin").unwrap().smiles, ASPIRIN);
        assert_eq!(example_by_name("Penicillin G").unwrap().smiles, PENICILLIN_G);
    }

    #[test]
    fn test_explanation_lookup() {
        let text = cached_explanation(ASPIRIN, "bbb").unwrap();
        assert!(text.starts_with("Aspirin does not effectively cross"));
        assert!(cached_explanation(ASPIRIN, "ic50").is_none());
        assert!(cached_explanation("CCO", "bbb").is_none());
    }

    #[test]
    fn test_every_catalog_molecule_has_eight_explanations() {
        for molecule in EXAMPLE_MOLECULES {
            let entries = explanation_table().get(molecule.smiles);
            assert!(entries.is_some(), "{} lacks explanations", molecule.name);
            assert_eq!(entries.unwrap().len(), 8, "{}", molecule.name);
        }
    }

    #[test]
    fn test_chat_cache_hits_single_user_turn() {
        let history = vec![ChatTurn::user("I need a non-drowsy antihistamine")];
        let reply = cached_chat_reply(&history).unwrap();
        assert!(reply.text.starts_with("Second-generation antihistamines"));
        let structured = reply.structured.unwrap();
        assert_eq!(structured.suggestions.unwrap().len(), 3);
        assert_eq!(structured.molecules.unwrap()[0].name, "Cetirizine");
    }

    #[test]
    fn test_chat_cache_trims_content() {
        let history = vec![ChatTurn::user("  I need a non-drowsy antihistamine \n")];
        assert!(cached_chat_reply(&history).is_some());
    }

    #[test]
    fn test_chat_cache_ignores_longer_histories() {
        let history = vec![
            ChatTurn::user("hello"),
            ChatTurn::user("I need a non-drowsy antihistamine"),
        ];
        assert!(cached_chat_reply(&history).is_none());
    }

    #[test]
    fn test_chat_cache_requires_user_role() {
        let history = vec![ChatTurn::assistant(
            "I need a non-drowsy antihistamine",
            None,
        )];
        assert!(cached_chat_reply(&history).is_none());
    }
}

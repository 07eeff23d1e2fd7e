//! Prompt construction for the TxGemma endpoints.
//!
//! Scoring prompts follow the TDC instruction format the model was tuned
//! on: an Instructions/Context/Question preamble, the drug SMILES, and a
//! trailing `Answer:` for the model to complete. Classification questions
//! enumerate the two outcomes as `(A)`/`(B)`; regression questions ask for
//! a normalized 000-1000 score that the parser rescales to real units.

use elionyx_common::{property_by_id, PredictionResult, PropertyDefinition};

use crate::error::PredictError;

/// Scoring prompt for one property. Binding-affinity templates embed the
/// target, defaulting to a literal `Unknown` when the caller has none.
pub fn scoring_prompt(
    property_id: &str,
    smiles: &str,
    target: Option<&str>,
) -> Result<String, PredictError> {
    let target = target.unwrap_or("Unknown");
    let prompt = match property_id {
        "bbb" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: As a membrane separating circulating blood and brain extracellular fluid, \
             the blood-brain barrier (BBB) is the protection layer that blocks most foreign \
             drugs. Thus the ability of a drug to penetrate the barrier to deliver to the site \
             of action forms a crucial challenge in development of drugs for central nervous \
             system.\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) does not cross the BBB (B) crosses the BBB\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "caco2" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: The human colon epithelial cancer cell line, Caco-2, is used as an in \
             vitro model to simulate the human intestinal tissue. The experimental result on \
             the rate of drug passing through the Caco-2 cells can approximate the rate at \
             which the drug permeates through the human intestinal tissue.\n\
             Question: Given a drug SMILES string, predict its normalized Caco-2 cell \
             effective permeability from 000 to 1000, where 000 is minimum permeability and \
             1000 is maximum permeability.\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "ppbr" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: The human plasma protein binding rate (PPBR) is expressed as the \
             percentage of a drug bound to plasma proteins in the blood. This rate strongly \
             affect a drug's efficiency of delivery. The less bound a drug is, the more \
             efficiently it can traverse and diffuse to the site of actions.\n\
             Question: Given a drug SMILES string, predict its normalized rate of PPBR from \
             000 to 1000, where 000 is minimum PPBR rate and 1000 is maximum PPBR rate.\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "logp" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Lipophilicity measures the ability of a drug to dissolve in a lipid \
             (e.g. fats, oils) environment. High lipophilicity often leads to high rate of \
             metabolism, poor solubility, high turn-over, and low absorption.\n\
             Question: Given a drug SMILES string, predict its normalized lipophilicity from \
             000 to 1000, where 000 is minimum lipophilicity and 1000 is maximum \
             lipophilicity.\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "ames" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Mutagenicity means the ability of a drug to induce genetic alterations. \
             Drugs that can cause damage to the DNA can result in cell death or other severe \
             adverse effects. Nowadays, the most widely used assay for testing the mutagenicity \
             of compounds is the Ames experiment which was invented by a professor named Ames. \
             The Ames test is a short-term bacterial reverse mutation assay detecting a large \
             number of compounds which can induce genetic damage and frameshift mutations.\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) is not mutagenic (B) is mutagenic\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "dili" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Drug-induced liver injury (DILI) is fatal liver disease caused by drugs \
             and it has been the single most frequent cause of safety-related drug marketing \
             withdrawals for the past 50 years (e.g. iproniazid, ticrynafen, benoxaprofen).\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) cannot cause DILI (B) can cause DILI\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "herg" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Human ether-à-go-go related gene (hERG) is crucial for the \
             coordination of the heart's beating. Thus, if a drug blocks the hERG, it could \
             lead to severe adverse effects. Therefore, reliable prediction of hERG liability \
             in the early stages of drug design is quite important to reduce the risk of \
             cardiotoxicity-related attritions in the later development stages.\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) does not block hERG (B) blocks hERG\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "ld50" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Acute toxicity LD50 measures the most conservative dose that can lead \
             to lethal adverse effects. The lower the dose, the more lethal of a drug.\n\
             Question: Given a drug SMILES string, predict its normalized LD50 from 000 to \
             1000, where 000 is minimum LD50 and 1000 is maximum LD50.\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "ic50" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: The half maximal inhibitory concentration (IC50) measures how much of a \
             drug is needed to inhibit a given biological target by half. It is the most \
             common measure of potency in early drug discovery. The lower the concentration \
             required, the more potent the compound.\n\
             Question: Given a target and a drug SMILES string, predict the normalized \
             binding affinity from 000 to 1000, where 000 is minimum binding affinity and \
             1000 is maximum binding affinity.\n\
             Target: {target}\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "kd" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: The dissociation constant (Kd) measures the equilibrium between the \
             drug-target complex and the unbound drug and target. It reflects how tightly a \
             drug binds its target. The lower the Kd, the tighter the binding.\n\
             Question: Given a target and a drug SMILES string, predict the normalized \
             dissociation constant from 000 to 1000, where 000 is minimum Kd and 1000 is \
             maximum Kd.\n\
             Target: {target}\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "clinical_phase1" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Phase 1 clinical trials test a drug candidate in a small group of \
             healthy volunteers to evaluate its safety, tolerability, and pharmacokinetics. \
             Unexpected toxicity is the dominant cause of failure at this stage.\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) fails Phase 1 trial (B) passes Phase 1 trial\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "clinical_phase2" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Phase 2 clinical trials test a drug candidate in patients with the \
             target disease to evaluate its efficacy and short-term side effects. This stage \
             has the highest attrition in drug development, with most candidates failing for \
             lack of efficacy.\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) fails Phase 2 trial (B) passes Phase 2 trial\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        "clinical_phase3" => format!(
            "Instructions: Answer the following question about drug properties.\n\
             Context: Phase 3 clinical trials compare a drug candidate against the current \
             standard of care in large patient populations to confirm its efficacy and \
             monitor adverse reactions. Passing this stage is the final requirement before \
             regulatory approval.\n\
             Question: Given a drug SMILES string, predict whether it\n\
             (A) fails Phase 3 trial (B) passes Phase 3 trial\n\
             Drug SMILES: {smiles}\n\
             Answer:"
        ),
        other => return Err(PredictError::NoPromptTemplate(other.to_string())),
    };
    Ok(prompt)
}

/// Prompt asking the chat model to justify an already-computed prediction.
pub fn explanation_prompt(
    property: &PropertyDefinition,
    smiles: &str,
    prediction: &str,
) -> String {
    format!(
        "You are TxGemma, a therapeutic AI model. A molecule with SMILES \"{smiles}\" was \
         predicted to have the following result for {name}: {prediction}.\n\
         \n\
         In 2-3 sentences, explain why this molecule shows this property. Focus on the most \
         relevant structural features (e.g. functional groups, MW, H-bond donors/acceptors, \
         logP, charge). Be direct and scientifically precise. Do not add caveats, \
         disclaimers, or closing remarks.",
        name = property.name,
    )
}

const CHAT_PERSONA: &str = r#"You are TxGemma, a therapeutic AI assistant specialized in drug discovery and molecular design. You help medicinal chemists design better drug candidates through conversational guidance.

You can:
- Suggest molecular modifications and design strategies
- Explain molecular properties and prediction results
- Recommend starting scaffolds and lead compounds
- Answer questions about ADMET, toxicity, binding affinity, and clinical trial outcomes

Be scientifically rigorous, cite specific structural features, and provide actionable insights. Keep responses concise but informative.

When suggesting molecules, include a JSON block in your response like this:
{"startingMolecules":[{"name":"Drug Name","smiles":"VALID_SMILES"}]}
Only include this JSON block when you are actively suggesting specific molecules. For general discussion, respond in plain text."#;

/// System prompt for open-ended chat. When a molecule is in focus its SMILES
/// and any computed predictions ride along as context; predictions whose
/// property id does not resolve in the registry are dropped.
pub fn chat_system_prompt(
    current_smiles: Option<&str>,
    current_predictions: &[PredictionResult],
) -> String {
    let mut prompt = CHAT_PERSONA.to_string();

    if let Some(smiles) = current_smiles.filter(|s| !s.is_empty()) {
        prompt.push_str(&format!(
            "\n\nThe user is currently working with this molecule: {smiles}"
        ));

        if !current_predictions.is_empty() {
            prompt.push_str("\nCurrent predictions for this molecule:");
            for pred in current_predictions {
                if let Some(property) = property_by_id(&pred.property_id) {
                    prompt.push_str(&format!("\n- {}: {}", property.name, pred.value));
                }
            }
        }
    }

    prompt
}

const GUIDANCE_FORMAT: &str = r#"Provide structured design guidance in the following JSON format. Be concise and scientifically rigorous.

{
  "summary": "A 2-3 sentence paragraph summarizing the recommended design strategy.",
  "suggestions": [
    {"text": "Specific actionable suggestion", "type": "modify|add|remove|general"}
  ],
  "startingMolecules": [
    {"name": "Human-readable name", "smiles": "Valid SMILES string"}
  ]
}

Rules:
- Include 3-5 actionable suggestions. Use type "modify" for structural changes, "add" for new groups, "remove" for groups to avoid, "general" for strategy advice.
- Include 1-3 starting molecules with valid SMILES strings and descriptive names.
- Focus on practical medicinal chemistry modifications.
- Return ONLY the JSON object, no other text."#;

/// Prompt asking for strict-JSON design guidance toward a therapeutic goal.
pub fn design_guidance_prompt(therapeutic_goal: &str) -> String {
    format!(
        "You are TxGemma, a therapeutic AI model specialized in drug design. A medicinal \
         chemist has the following therapeutic goal:\n\
         \n\
         \"{therapeutic_goal}\"\n\
         \n\
         {GUIDANCE_FORMAT}"
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Nucleic acid extraction rules

use crate::check::{RatioBandCheck, RequiredCheck, TieredRangeCheck};
use crate::rule::ValidationRule;
use crate::standards::{
    DNA_CONCENTRATION, DNA_VOLUME, NANODROP, PURITY_260_280, RNA_INTEGRITY,
};
use seqlims_model::ValidationLevel;

/// Rules for nucleic acid extraction records
///
/// Required: `sampleCode`, `dnaConcentration`, `dnaVolume`.
#[must_use]
pub fn nucleic_extraction_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::new("sample_code_required", "sampleCode", RequiredCheck::new("样本编号"))
            .with_description("样本编号不能为空"),
        ValidationRule::new(
            "dna_concentration_range",
            "dnaConcentration",
            TieredRangeCheck::new("DNA浓度", DNA_CONCENTRATION)
                .required()
                .low_suggestion("建议重新提取或浓缩样本，DNA浓度应不低于 10 ng/μL"),
        )
        .with_description("DNA浓度需在 10-1000 ng/μL 之间，最佳 50-200 ng/μL"),
        ValidationRule::new(
            "purity_260_280",
            "purity260280",
            RatioBandCheck::from_standard("DNA纯度 (A260/A280)", &PURITY_260_280)
                .when_low(
                    ValidationLevel::Warning,
                    "DNA纯度 (A260/A280) 偏低，可能存在蛋白质污染",
                )
                .when_high(
                    ValidationLevel::Warning,
                    "DNA纯度 (A260/A280) 偏高，可能存在RNA污染",
                )
                .excellent_message("DNA纯度优秀"),
        )
        .with_description("A260/A280 应在 1.8-2.0 之间"),
        ValidationRule::new(
            "purity_260_230",
            "purity260230",
            RatioBandCheck::new("DNA纯度 (A260/A230)", 2.0, 2.2)
                .when_low(
                    ValidationLevel::Warning,
                    "DNA纯度 (A260/A230) 偏低，可能存在盐离子或有机溶剂残留",
                )
                .when_high(
                    ValidationLevel::Info,
                    "DNA纯度 (A260/A230) 偏高，请确认空白对照",
                )
                .reference(NANODROP),
        )
        .with_description("A260/A230 通常应在 2.0-2.2 之间"),
        ValidationRule::new(
            "dna_volume_range",
            "dnaVolume",
            TieredRangeCheck::new("DNA体积", DNA_VOLUME)
                .required()
                .low_hint("可能不足以完成后续实验")
                .above_optimal_hint("建议分装保存"),
        )
        .with_description("DNA体积需在 20-500 μL 之间"),
        ValidationRule::new(
            "rna_integrity_range",
            "rnaIntegrity",
            TieredRangeCheck::new("RNA完整性", RNA_INTEGRITY)
                .low_hint("RNA可能已降解")
                .high_hint("RIN 不应超过 10"),
        )
        .with_description("RIN 值应不低于 7"),
    ]
}

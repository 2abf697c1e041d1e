//! Quality standards tables
//!
//! One read-only table per experiment stage. Rule sets draw their thresholds
//! from these entries, and the engine uses them for ad-hoc value checks.

use seqlims_model::{ExperimentType, QualityStandard};

pub(crate) const NANODROP: &str = "Thermo Scientific NanoDrop 核酸定量与纯度评估技术说明";
const RIN: &str = "Agilent 2100 Bioanalyzer RNA 完整性评估 (RIN)";
const MIQE: &str = "MIQE 指南 (Bustin et al., Clin Chem 2009)";
const PCR_CLEANUP: &str = "QIAquick PCR 纯化试剂盒手册";
const ILLUMINA_PREP: &str = "Illumina DNA Prep 文库制备参考指南";
const KAPA_QUANT: &str = "KAPA 文库定量试剂盒技术说明";

/// DNA浓度
pub const DNA_CONCENTRATION: QualityStandard = QualityStandard {
    name: "DNA浓度",
    parameter: "dnaConcentration",
    min_value: Some(10.0),
    max_value: Some(1000.0),
    optimal_value: None,
    optimal_range: Some((50.0, 200.0)),
    unit: Some("ng/μL"),
    source: Some(NANODROP),
};

/// DNA纯度 (A260/A280)
pub const PURITY_260_280: QualityStandard = QualityStandard {
    name: "DNA纯度 (A260/A280)",
    parameter: "purity260280",
    min_value: Some(1.8),
    max_value: Some(2.0),
    optimal_value: Some(1.9),
    optimal_range: Some((1.85, 1.95)),
    unit: None,
    source: Some(NANODROP),
};

/// DNA体积
pub const DNA_VOLUME: QualityStandard = QualityStandard {
    name: "DNA体积",
    parameter: "dnaVolume",
    min_value: Some(20.0),
    max_value: Some(500.0),
    optimal_value: None,
    optimal_range: Some((50.0, 200.0)),
    unit: Some("μL"),
    source: None,
};

/// RNA完整性 (RIN)
pub const RNA_INTEGRITY: QualityStandard = QualityStandard {
    name: "RNA完整性 (RIN)",
    parameter: "rnaIntegrity",
    min_value: Some(7.0),
    max_value: Some(10.0),
    optimal_value: None,
    optimal_range: Some((8.0, 10.0)),
    unit: None,
    source: Some(RIN),
};

/// Nucleic acid extraction
pub const NUCLEIC_EXTRACTION_STANDARDS: &[QualityStandard] = &[
    DNA_CONCENTRATION,
    PURITY_260_280,
    DNA_VOLUME,
    RNA_INTEGRITY,
];

/// PCR产物浓度
pub const PCR_PRODUCT: QualityStandard = QualityStandard {
    name: "PCR产物浓度",
    parameter: "pcrProduct",
    min_value: Some(5.0),
    max_value: Some(500.0),
    optimal_value: None,
    optimal_range: Some((20.0, 100.0)),
    unit: Some("ng/μL"),
    source: Some(PCR_CLEANUP),
};

/// 扩增效率
pub const AMPLIFICATION_EFFICIENCY: QualityStandard = QualityStandard {
    name: "扩增效率",
    parameter: "amplificationEfficiency",
    min_value: Some(90.0),
    max_value: Some(110.0),
    optimal_value: Some(100.0),
    optimal_range: Some((95.0, 105.0)),
    unit: Some("%"),
    source: Some(MIQE),
};

/// 条带大小
pub const BAND_SIZE: QualityStandard = QualityStandard {
    name: "条带大小",
    parameter: "bandSize",
    min_value: Some(100.0),
    max_value: Some(3000.0),
    optimal_value: None,
    optimal_range: Some((200.0, 1000.0)),
    unit: Some("bp"),
    source: None,
};

/// Ct值
pub const CT_VALUE: QualityStandard = QualityStandard {
    name: "Ct值",
    parameter: "ctValue",
    min_value: Some(10.0),
    max_value: Some(35.0),
    optimal_value: None,
    optimal_range: Some((15.0, 30.0)),
    unit: None,
    source: Some(MIQE),
};

/// PCR amplification
pub const PCR_AMPLIFICATION_STANDARDS: &[QualityStandard] = &[
    PCR_PRODUCT,
    AMPLIFICATION_EFFICIENCY,
    BAND_SIZE,
    CT_VALUE,
];

/// 文库浓度
pub const LIBRARY_CONCENTRATION: QualityStandard = QualityStandard {
    name: "文库浓度",
    parameter: "libraryConcentration",
    min_value: Some(2.0),
    max_value: Some(100.0),
    optimal_value: None,
    optimal_range: Some((5.0, 50.0)),
    unit: Some("ng/μL"),
    source: Some(ILLUMINA_PREP),
};

/// 片段大小
pub const FRAGMENT_SIZE: QualityStandard = QualityStandard {
    name: "片段大小",
    parameter: "fragmentSize",
    min_value: Some(200.0),
    max_value: Some(800.0),
    optimal_value: Some(400.0),
    optimal_range: Some((300.0, 500.0)),
    unit: Some("bp"),
    source: Some(ILLUMINA_PREP),
};

/// 文库摩尔浓度
pub const MOLAR_CONCENTRATION: QualityStandard = QualityStandard {
    name: "文库摩尔浓度",
    parameter: "molarConcentration",
    min_value: Some(2.0),
    max_value: Some(100.0),
    optimal_value: None,
    optimal_range: Some((4.0, 20.0)),
    unit: Some("nM"),
    source: Some(KAPA_QUANT),
};

/// 接头二聚体比例
pub const ADAPTER_DIMER_RATIO: QualityStandard = QualityStandard {
    name: "接头二聚体比例",
    parameter: "adapterDimerRatio",
    min_value: Some(0.0),
    max_value: Some(5.0),
    optimal_value: None,
    optimal_range: Some((0.0, 1.0)),
    unit: Some("%"),
    source: Some(ILLUMINA_PREP),
};

/// Library construction
pub const LIBRARY_CONSTRUCTION_STANDARDS: &[QualityStandard] = &[
    LIBRARY_CONCENTRATION,
    FRAGMENT_SIZE,
    MOLAR_CONCENTRATION,
    ADAPTER_DIMER_RATIO,
];

/// Standards table for an experiment type
#[inline]
#[must_use]
pub fn standards_for(experiment: ExperimentType) -> &'static [QualityStandard] {
    match experiment {
        ExperimentType::NucleicExtraction => NUCLEIC_EXTRACTION_STANDARDS,
        ExperimentType::PcrAmplification => PCR_AMPLIFICATION_STANDARDS,
        ExperimentType::LibraryConstruction => LIBRARY_CONSTRUCTION_STANDARDS,
    }
}

/// First standard whose `parameter` matches
#[inline]
#[must_use]
pub fn find_standard<'a>(
    table: &'a [QualityStandard],
    parameter: &str,
) -> Option<&'a QualityStandard> {
    table.iter().find(|s| s.parameter == parameter)
}

use crate::core::models::hsp::HspVector;
use phf::{Map, phf_map};

/// A built-in solute entry: HSP vector plus interaction radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoluteRecord {
    pub hsp: HspVector,
    pub ro: f64,
}

/// Built-in solvent reference table (δD, δP, δH in MPa^0.5).
///
/// Transcribed from published Hansen parameter listings; names are the
/// common trade or IUPAC names, some with abbreviations in parentheses.
pub static SOLVENTS: Map<&'static str, HspVector> = phf_map! {
    "Water" => HspVector { d: 15.5, p: 16.0, h: 42.3 },
    "Ethanol" => HspVector { d: 15.8, p: 8.8, h: 19.4 },
    "Acetone" => HspVector { d: 15.5, p: 10.4, h: 7.0 },
    "Toluene" => HspVector { d: 18.0, p: 1.4, h: 2.0 },
    "Hexane" => HspVector { d: 14.9, p: 0.0, h: 0.0 },
    "MTBE" => HspVector { d: 15.3, p: 4.0, h: 2.6 },
    "Ethyl acetate" => HspVector { d: 15.8, p: 5.3, h: 7.2 },
    "Methyl Isobutyl Ketone (MIBK)" => HspVector { d: 15.3, p: 6.1, h: 4.1 },
    "Heptane" => HspVector { d: 15.3, p: 0.0, h: 0.0 },
    "Rapeseed oil" => HspVector { d: 17.0, p: 2.0, h: 5.0 },
    "Dimethyl sulfoxide (DMSO)" => HspVector { d: 18.4, p: 16.4, h: 10.2 },
    "Propylene carbonate" => HspVector { d: 20.0, p: 18.0, h: 4.1 },
    "N-Methyl-2-pyrrolidone (NMP)" => HspVector { d: 18.0, p: 12.3, h: 7.2 },
    "γ-Butyrolactone (GBL)" => HspVector { d: 19.0, p: 16.6, h: 7.4 },
    "Chloroform" => HspVector { d: 17.8, p: 3.1, h: 5.7 },
    "Acetonitrile" => HspVector { d: 15.3, p: 18.0, h: 6.1 },
    "Dichloromethane (DCM)" => HspVector { d: 18.2, p: 6.3, h: 7.1 },
    "Anisole" => HspVector { d: 17.8, p: 4.4, h: 6.9 },
    "Cyclohexanone" => HspVector { d: 17.8, p: 8.4, h: 5.1 },
    "Tetrahydrofuran" => HspVector { d: 16.8, p: 5.7, h: 8.0 },
    "Acetaldehyde" => HspVector { d: 14.7, p: 12.5, h: 7.9 },
    "Acetic acid" => HspVector { d: 14.5, p: 8.0, h: 13.5 },
    "Acetic Anhydride" => HspVector { d: 16.0, p: 11.7, h: 10.2 },
    "Acetophenone" => HspVector { d: 18.8, p: 9.0, h: 4.0 },
    "Acrylonitrile" => HspVector { d: 16.0, p: 12.8, h: 6.8 },
    "AllyAlcohol" => HspVector { d: 16.2, p: 10.8, h: 16.8 },
    "Amyl Acetate" => HspVector { d: 15.8, p: 3.3, h: 6.1 },
    "Aniline" => HspVector { d: 20.1, p: 5.8, h: 11.2 },
    "Benzaldehyde" => HspVector { d: 19.4, p: 7.4, h: 5.3 },
    "Benzene" => HspVector { d: 18.4, p: 0.0, h: 2.0 },
    "Benzoic acid" => HspVector { d: 20.0, p: 6.9, h: 10.8 },
    "Benzonitrile" => HspVector { d: 18.8, p: 12.0, h: 3.3 },
    "Benzophenone" => HspVector { d: 19.5, p: 7.2, h: 5.1 },
    "Benzylalcohol" => HspVector { d: 18.4, p: 6.3, h: 13.7 },
    "Benzyl Benzoate" => HspVector { d: 20.0, p: 5.1, h: 5.2 },
    "Benzyl Butyl Phthalate" => HspVector { d: 19.0, p: 11.2, h: 3.1 },
    "Benzyl Chloride" => HspVector { d: 18.8, p: 7.1, h: 2.6 },
    "Biphenyl" => HspVector { d: 19.7, p: 1.0, h: 2.0 },
    "Bis-(M-phenoxyphenyl) Esther" => HspVector { d: 19.6, p: 3.1, h: 5.1 },
    "Bromobezene" => HspVector { d: 19.2, p: 5.5, h: 4.1 },
    "Bromochloromethane" => HspVector { d: 17.3, p: 5.7, h: 3.5 },
    "Bromoform" => HspVector { d: 20.0, p: 5.0, h: 7.0 },
    "1-Bromonapthelene" => HspVector { d: 20.6, p: 3.1, h: 4.1 },
    "Bromotrifluoromethane (Freon 1381)" => HspVector { d: 14.3, p: 2.4, h: 0.0 },
    "Butane" => HspVector { d: 14.1, p: 0.0, h: 0.0 },
    "1,3 Butandiol" => HspVector { d: 16.5, p: 8.1, h: 20.9 },
    "1,4 Butandiol" => HspVector { d: 16.6, p: 11.0, h: 20.9 },
    "1-Butanol" => HspVector { d: 16.0, p: 5.7, h: 15.8 },
    "2-Butanol" => HspVector { d: 15.8, p: 5.7, h: 14.5 },
    "n-Butyl Acetate" => HspVector { d: 15.0, p: 3.7, h: 6.3 },
    "t-butyl Acetate" => HspVector { d: 15.0, p: 3.7, h: 6.0 },
    "n-Butyl Aceto Acetate" => HspVector { d: 16.6, p: 5.8, h: 7.3 },
    "n-Butyl Acrylate" => HspVector { d: 15.6, p: 6.2, h: 4.9 },
    "t-Buytl Alcohol" => HspVector { d: 15.2, p: 5.1, h: 14.7 },
    "n-Butyl Amine" => HspVector { d: 16.2, p: 4.5, h: 8.0 },
    "n-Butyl Amine/Acetic Acid" => HspVector { d: 16.0, p: 20.3, h: 18.4 },
    "Butyl Lactate" => HspVector { d: 15.8, p: 6.5, h: 10.2 },
    "Butyraldehyde" => HspVector { d: 15.6, p: 10.1, h: 6.2 },
    "Butyric Acid" => HspVector { d: 15.7, p: 4.8, h: 12.0 },
    "y-Butyrolactone (GBL)" => HspVector { d: 18.0, p: 16.6, h: 7.4 },
    "Butyronitrile" => HspVector { d: 15.3, p: 12.4, h: 5.1 },
    "Caprolactone (Epsilon)" => HspVector { d: 18.0, p: 15.0, h: 7.4 },
    "Carbon Disulfide" => HspVector { d: 20.2, p: 0.0, h: 0.6 },
    "Carbon Tetrachloride" => HspVector { d: 16.1, p: 8.3, h: 0.0 },
    "1-Chloro pentane" => HspVector { d: 16.0, p: 6.9, h: 1.9 },
    "3-Chloro-1-Propanol" => HspVector { d: 17.5, p: 5.7, h: 14.7 },
    "Chlorobezene" => HspVector { d: 19.0, p: 4.3, h: 2.0 },
    "1-Chlorobutane" => HspVector { d: 16.2, p: 5.5, h: 2.0 },
    "Chlorodifluoromethane (Freon 22)" => HspVector { d: 12.3, p: 6.3, h: 5.7 },
    "Cis-Decahydronapthalene" => HspVector { d: 17.6, p: 0.0, h: 0.0 },
    "m-Cresol" => HspVector { d: 18.5, p: 6.5, h: 13.7 },
    "Cyclohexane" => HspVector { d: 16.8, p: 0.0, h: 0.2 },
    "Cyclohexanol" => HspVector { d: 17.4, p: 4.1, h: 13.5 },
    "Cyclohexylamine" => HspVector { d: 17.2, p: 3.1, h: 6.5 },
    "Cyclohexylchloride" => HspVector { d: 17.3, p: 5.5, h: 2.0 },
    "Cyclopentanone" => HspVector { d: 17.9, p: 11.9, h: 5.2 },
    "Decane" => HspVector { d: 15.7, p: 0.0, h: 0.0 },
    "1-Decanol" => HspVector { d: 16.0, p: 4.7, h: 10.5 },
    "Di-(2-chloro-isopropyl) Ether" => HspVector { d: 19.0, p: 8.2, h: 5.1 },
    "Di-(2-Methoxyethyl) Ether" => HspVector { d: 15.7, p: 6.1, h: 6.5 },
    "Diacetone Alcohol" => HspVector { d: 15.8, p: 8.2, h: 10.8 },
    "Dibenzyl Ether" => HspVector { d: 19.6, p: 3.4, h: 5.2 },
    "Dibutyl Phthalate" => HspVector { d: 17.8, p: 8.6, h: 4.1 },
    "Dibutyl Sebacate" => HspVector { d: 16.7, p: 4.5, h: 4.1 },
    "m-Dichlorobenzene" => HspVector { d: 19.2, p: 5.1, h: 2.7 },
    "0-Dichlorobenzene" => HspVector { d: 19.2, p: 6.3, h: 3.3 },
    "p-Dichlorobenzene" => HspVector { d: 19.7, p: 5.6, h: 2.7 },
    "1,4-Dichlorobutane" => HspVector { d: 18.3, p: 7.7, h: 2.8 },
    "Dichlorodifluoromethane (Freon 12)" => HspVector { d: 14.9, p: 2.0, h: 0.0 },
    "1,1-Dichloroethane" => HspVector { d: 16.5, p: 7.8, h: 3.0 },
    "1,2-Dichloroethylene" => HspVector { d: 17.0, p: 8.0, h: 3.2 },
    "Dichloroethylene" => HspVector { d: 16.7, p: 7.8, h: 3.3 },
    "Dichloromethane" => HspVector { d: 18.2, p: 6.3, h: 6.1 },
    "Dichloromonofluorimethane (Freon 21)" => HspVector { d: 15.8, p: 3.1, h: 5.7 },
    "1,2-Dichlorotetrafluoroethane (Freon 114)" => HspVector { d: 12.6, p: 1.8, h: 0.0 },
    "Diethanolamine" => HspVector { d: 17.2, p: 7.0, h: 19.0 },
    "Diethyl Amine" => HspVector { d: 14.9, p: 2.3, h: 6.1 },
    "1,2-Diethyl Benzene" => HspVector { d: 17.7, p: 0.1, h: 1.0 },
    "p-Diethyl Benzene" => HspVector { d: 18.0, p: 0.0, h: 0.6 },
    "Diethyl Carbonate" => HspVector { d: 15.1, p: 6.3, h: 3.5 },
    "Diethyl Ether" => HspVector { d: 14.5, p: 2.9, h: 4.6 },
    "Diethyl Ketone" => HspVector { d: 15.8, p: 7.6, h: 4.7 },
    "Diethyl Phthalate" => HspVector { d: 17.6, p: 9.6, h: 4.5 },
    "Diethyl Sulfate" => HspVector { d: 15.7, p: 12.7, h: 5.1 },
    "Diethyl Sulfide" => HspVector { d: 16.8, p: 3.1, h: 2.0 },
    "2-(Diethylamino) Ethanol" => HspVector { d: 15.7, p: 5.8, h: 12.0 },
    "Diethylene Glycol" => HspVector { d: 16.6, p: 12.0, h: 19.0 },
    "Diethylene Glycol Butyl Ether Acetate" => HspVector { d: 16.0, p: 4.1, h: 8.2 },
    "Diethylene Glycol Hexyl Ether" => HspVector { d: 16.0, p: 6.0, h: 10.0 },
    "Diethylene Glycol Monobutyl Ether" => HspVector { d: 16.0, p: 7.0, h: 10.6 },
    "Diethylene Glycol Monoethyl Ether" => HspVector { d: 16.1, p: 9.2, h: 12.2 },
    "Diethylene Glycol Monoethyl Ether Acetae" => HspVector { d: 16.2, p: 5.1, h: 9.2 },
    "Diethylene Glycol Monomethyl Ether" => HspVector { d: 16.2, p: 7.8, h: 12.6 },
    "Diethylenetriamine" => HspVector { d: 16.7, p: 7.1, h: 14.3 },
    "Di-isobutyl Carbinol" => HspVector { d: 14.9, p: 3.1, h: 10.8 },
    "Di-isobutyl Ketone" => HspVector { d: 16.0, p: 3.7, h: 4.1 },
    "Di-isopropylamine" => HspVector { d: 14.8, p: 1.7, h: 3.5 },
    "1,2-Dimethoxybenzene" => HspVector { d: 19.2, p: 4.4, h: 9.4 },
    "Dimethyl Disulfide" => HspVector { d: 17.6, p: 7.8, h: 6.5 },
    "Dimethyl Formanide (DMF)" => HspVector { d: 17.4, p: 13.7, h: 11.3 },
    "1,1-Dimethyl Hydrazine" => HspVector { d: 15.3, p: 5.9, h: 11.0 },
    "Dimethyl Phthalate" => HspVector { d: 18.6, p: 10.8, h: 4.9 },
    "Dimethyl Sulfone" => HspVector { d: 19.0, p: 19.4, h: 12.3 },
    "1,4-Dioxane" => HspVector { d: 17.5, p: 1.8, h: 9.0 },
    "Dipropylene Glycol" => HspVector { d: 16.5, p: 10.6, h: 17.7 },
    "Dipropylene Glycol Methyl Ether" => HspVector { d: 15.5, p: 5.7, h: 11.2 },
    "Dodecane" => HspVector { d: 16.0, p: 0.0, h: 0.0 },
    "Eicosane" => HspVector { d: 16.5, p: 0.0, h: 0.0 },
    "Epichlorohydrin" => HspVector { d: 17.5, p: 7.6, h: 7.6 },
    "Ethanethiol" => HspVector { d: 15.7, p: 6.5, h: 7.1 },
    "Ethanolamine" => HspVector { d: 17.0, p: 15.5, h: 21.0 },
    "Ethyl Acrylate" => HspVector { d: 15.5, p: 7.1, h: 5.5 },
    "Ethyl Amyl Ketone" => HspVector { d: 16.2, p: 4.5, h: 4.1 },
    "Ethyl Benzene" => HspVector { d: 17.8, p: 0.6, h: 1.4 },
    "Ethyl Bromide" => HspVector { d: 16.5, p: 8.4, h: 2.3 },
    "Ethyl Butyl Ketone" => HspVector { d: 16.2, p: 5.0, h: 4.1 },
    "Ethyl Chloride" => HspVector { d: 15.7, p: 6.1, h: 2.9 },
    "Ethyl Chloroformate" => HspVector { d: 16.4, p: 11.0, h: 8.0 },
    "Ethyl Cinnamate" => HspVector { d: 18.4, p: 8.2, h: 4.1 },
    "Ethyl Formate" => HspVector { d: 15.5, p: 8.4, h: 8.4 },
    "Ethyl Lactate" => HspVector { d: 16.0, p: 7.6, h: 12.5 },
    "Ethylene Carbonate" => HspVector { d: 18.0, p: 21.7, h: 5.1 },
    "Ethylene Cyanohydrin" => HspVector { d: 17.2, p: 18.8, h: 17.6 },
    "Ethylene Dibromide" => HspVector { d: 19.2, p: 3.5, h: 8.6 },
    "Ethylene Dichloride" => HspVector { d: 18.0, p: 7.4, h: 4.1 },
    "Ethylene Glycol" => HspVector { d: 17.0, p: 11.0, h: 26.0 },
    "Ethylene Glycol Butyl Ether Acetate" => HspVector { d: 15.3, p: 7.5, h: 6.8 },
    "Ethylene Glycol dibutyl Ether" => HspVector { d: 15.7, p: 4.5, h: 4.2 },
    "Ethylene Glycol monobutyl Ether" => HspVector { d: 16.0, p: 5.1, h: 12.3 },
    "Ethylene Glycol monoethyl Ether" => HspVector { d: 15.9, p: 7.2, h: 14.0 },
    "Ethylene Glycol monoethyl Ether Acetate" => HspVector { d: 15.9, p: 4.7, h: 10.6 },
    "Ethylene Glycol monoethyl Ether " => HspVector { d: 16.0, p: 8.2, h: 15.0 },
    "Ethylene Glycol monoethyl Ether Acetate " => HspVector { d: 15.9, p: 5.5, h: 11.6 },
    "Ethylenediamine " => HspVector { d: 16.6, p: 8.8, h: 17.0 },
    "Formamide" => HspVector { d: 17.2, p: 26.2, h: 19.0 },
    "Formic Acid" => HspVector { d: 14.6, p: 10.0, h: 14.0 },
    "Furan" => HspVector { d: 17.0, p: 1.8, h: 5.3 },
    "Furfural" => HspVector { d: 18.6, p: 14.9, h: 5.1 },
    "Furfuryl Alcohol" => HspVector { d: 17.4, p: 7.6, h: 15.1 },
    "Glycerol" => HspVector { d: 17.4, p: 11.3, h: 27.2 },
    "Hexadecane" => HspVector { d: 16.3, p: 0.0, h: 0.0 },
    "Hexamethylphosphoramide" => HspVector { d: 18.5, p: 11.6, h: 8.7 },
    "Hexyl Acetate" => HspVector { d: 15.8, p: 2.9, h: 5.9 },
    "Isoamyl Acetate" => HspVector { d: 15.3, p: 3.1, h: 7.0 },
    "Isobutyl Acetate" => HspVector { d: 15.1, p: 3.7, h: 6.3 },
    "Isobutyl Alcohol" => HspVector { d: 14.4, p: 7.3, h: 12.9 },
    "Isopentane" => HspVector { d: 13.8, p: 0.0, h: 0.0 },
    "Isophorone" => HspVector { d: 17.0, p: 8.0, h: 5.0 },
    "Isopropyl Acetate" => HspVector { d: 14.9, p: 4.5, h: 8.2 },
    "Isopropyl Palmitate" => HspVector { d: 16.2, p: 3.9, h: 3.7 },
    "Mesityl Oxide" => HspVector { d: 16.4, p: 7.2, h: 5.0 },
    "Mesitylene" => HspVector { d: 18.0, p: 0.6, h: 0.6 },
    "Methacrylonitrile" => HspVector { d: 15.8, p: 9.5, h: 5.4 },
    "Methanol" => HspVector { d: 14.7, p: 12.3, h: 22.3 },
    "2-Methoxy-2-methylpropane" => HspVector { d: 14.8, p: 4.3, h: 5.0 },
    "o-Methoxyphenol" => HspVector { d: 18.0, p: 7.0, h: 12.0 },
    "Methyl Acetate" => HspVector { d: 15.5, p: 7.2, h: 7.6 },
    "Methyl Acrylate" => HspVector { d: 15.3, p: 6.7, h: 9.4 },
    "Methyl Amyl Acetate" => HspVector { d: 15.2, p: 3.1, h: 6.8 },
    "Methyl Benzoate" => HspVector { d: 18.9, p: 8.2, h: 4.7 },
    "Methyl Butyl Ketone" => HspVector { d: 15.3, p: 6.1, h: 4.1 },
    "Methyl Chloride" => HspVector { d: 15.3, p: 9.9, h: 3.9 },
    "Methyl Cyclohexane" => HspVector { d: 16.0, p: 0.0, h: 1.0 },
    "Methyl Ethyl Ketone" => HspVector { d: 16.0, p: 9.0, h: 5.1 },
    "Methyl Isoamyl Ketone" => HspVector { d: 16.0, p: 5.7, h: 4.1 },
    "Methyl Isobutyl Carbinol" => HspVector { d: 15.4, p: 3.3, h: 12.3 },
    "Methyl Methacrylate" => HspVector { d: 15.8, p: 6.5, h: 5.4 },
    "1-Methyl Napthalene" => HspVector { d: 19.7, p: 0.8, h: 4.7 },
    "Methyl Oleate" => HspVector { d: 16.2, p: 3.8, h: 4.5 },
    "N-Methyl Pyrrolidine" => HspVector { d: 16.8, p: 2.8, h: 6.7 },
    "Methyl Salicylate" => HspVector { d: 18.1, p: 8.0, h: 13.9 },
    "Methylal" => HspVector { d: 15.0, p: 1.8, h: 8.6 },
    "Methylene Dichloride" => HspVector { d: 17.0, p: 7.3, h: 7.1 },
    "Methylene Diiodide" => HspVector { d: 22.0, p: 3.9, h: 5.5 },
    "Morpholine" => HspVector { d: 18.0, p: 4.9, h: 11.0 },
    "N,N-Dimethyl Acetamide" => HspVector { d: 16.8, p: 11.5, h: 9.4 },
    "Naptha High-Flash" => HspVector { d: 17.9, p: 0.7, h: 1.8 },
    "Napthalene" => HspVector { d: 19.2, p: 2.0, h: 5.9 },
    "Nitrobenzene" => HspVector { d: 20.0, p: 10.6, h: 3.1 },
    "Nitroethane" => HspVector { d: 16.0, p: 15.5, h: 4.5 },
    "Nitromethane" => HspVector { d: 15.8, p: 18.8, h: 6.1 },
    "1-Nitropane" => HspVector { d: 16.6, p: 12.3, h: 5.5 },
    "2-Nitropane" => HspVector { d: 16.2, p: 12.1, h: 4.1 },
    "Nonane" => HspVector { d: 15.7, p: 0.0, h: 0.0 },
    "Nonyl Phenol" => HspVector { d: 16.5, p: 4.1, h: 9.2 },
    "Nonyl Phenoxy Ethanol" => HspVector { d: 16.7, p: 10.2, h: 8.4 },
    "Octane" => HspVector { d: 15.5, p: 0.0, h: 0.0 },
    "Octanoic Acid" => HspVector { d: 15.7, p: 3.3, h: 8.2 },
    "2-Octanol" => HspVector { d: 16.1, p: 4.9, h: 11.0 },
    "1-Octanol" => HspVector { d: 16.0, p: 5.0, h: 11.2 },
    "Oleic Acid" => HspVector { d: 16.0, p: 2.8, h: 6.2 },
    "Oleyl Alchohol" => HspVector { d: 16.5, p: 2.6, h: 8.0 },
    "1,3-Pentadiene" => HspVector { d: 15.0, p: 2.5, h: 4.0 },
    "Pentane" => HspVector { d: 14.5, p: 0.0, h: 0.0 },
    "2-Pentanol" => HspVector { d: 15.6, p: 6.4, h: 13.3 },
    "1-Pentanol" => HspVector { d: 15.9, p: 5.9, h: 13.9 },
    "Perfluro Dimethylcyclohexane" => HspVector { d: 12.4, p: 0.0, h: 0.0 },
    "Perfluroheptane" => HspVector { d: 12.0, p: 0.0, h: 0.0 },
    "Perfluoromethylcyclohexane" => HspVector { d: 12.4, p: 0.0, h: 0.0 },
    "Phenol" => HspVector { d: 18.5, p: 5.9, h: 14.9 },
    "1-Propanol" => HspVector { d: 16.0, p: 6.8, h: 17.4 },
    "2-Propanol" => HspVector { d: 15.8, p: 6.1, h: 16.4 },
    "Propionitrile" => HspVector { d: 15.3, p: 14.3, h: 5.5 },
    "n-Propyl Acetate" => HspVector { d: 16.0, p: 6.8, h: 17.4 },
    "Propyl Amine" => HspVector { d: 16.0, p: 4.9, h: 8.6 },
    "Propyl Chloride" => HspVector { d: 16.0, p: 7.8, h: 2.0 },
    "Propylene Carbonate" => HspVector { d: 20.0, p: 18.0, h: 4.1 },
    "Propylene Glycol" => HspVector { d: 16.8, p: 10.4, h: 21.3 },
    "Propylene Glycol Monobutyl Ether" => HspVector { d: 15.3, p: 4.5, h: 9.2 },
    "Propylene Glycol Monoethyl Ether" => HspVector { d: 15.7, p: 6.5, h: 10.5 },
    "Propylene Glycol Monoisobutyl Ether" => HspVector { d: 15.1, p: 4.7, h: 9.8 },
    "Propylene Glycol monomethyl Ether" => HspVector { d: 15.6, p: 6.3, h: 11.6 },
    "Propylene Glycol monophenyl Ether" => HspVector { d: 17.4, p: 5.3, h: 11.5 },
    "Propylene Glycol Monopropyl Ether" => HspVector { d: 15.8, p: 7.0, h: 9.2 },
    "Pyridine" => HspVector { d: 19.0, p: 8.8, h: 5.9 },
    "Pyrrolidine" => HspVector { d: 17.9, p: 6.5, h: 7.4 },
    "Quinoline" => HspVector { d: 20.5, p: 5.6, h: 5.7 },
    "Salicyaldehyde" => HspVector { d: 19.0, p: 10.5, h: 12.0 },
    "Styrene" => HspVector { d: 18.6, p: 1.0, h: 4.1 },
    "Succinic Anhydride" => HspVector { d: 18.6, p: 17.5, h: 16.0 },
    "1,1,2,2- Tetrabromoethane" => HspVector { d: 21.0, p: 7.0, h: 8.2 },
    "1,1,2,2- Tetrachloroethane" => HspVector { d: 18.0, p: 4.4, h: 4.2 },
    "Tetrachloroethylene" => HspVector { d: 18.3, p: 5.7, h: 0.0 },
    "Tetraethylorthosilicate" => HspVector { d: 13.9, p: 4.3, h: 0.6 },
    "Tetrahydrofuran (THF)" => HspVector { d: 16.8, p: 5.7, h: 8.0 },
    "Tetrahydronapthalene" => HspVector { d: 19.6, p: 2.0, h: 2.9 },
    "1,2,3,4-Tetramethylbenzene" => HspVector { d: 18.8, p: 0.5, h: 0.5 },
    "1,2,3,5-Tetramethylbenzene" => HspVector { d: 18.6, p: 0.5, h: 0.5 },
    "Tetramethyurea" => HspVector { d: 16.7, p: 8.2, h: 11.0 },
    "2-Toluidine" => HspVector { d: 19.4, p: 5.8, h: 9.4 },
    "Trichlorobiphenyl" => HspVector { d: 19.2, p: 5.3, h: 4.1 },
    "1,1,1-Trichloroethane" => HspVector { d: 16.8, p: 4.3, h: 2.0 },
    "1,1,2-Trichloroethane" => HspVector { d: 18.2, p: 5.3, h: 6.8 },
    "Trichloroethylene" => HspVector { d: 18.0, p: 3.1, h: 5.3 },
    "Trichlorofluoromethane (Freon 11)" => HspVector { d: 15.3, p: 2.0, h: 0.0 },
    "1,1,2-Trichlorotrifluoroethane (Freon 113)" => HspVector { d: 14.7, p: 1.6, h: 0.0 },
    "Tricresyl Phosphate" => HspVector { d: 19.0, p: 12.3, h: 4.5 },
    "Tricresyl Alcohol" => HspVector { d: 16.2, p: 3.1, h: 9.0 },
    "Triethanolamine" => HspVector { d: 17.3, p: 7.6, h: 21.0 },
    "Triethylamine" => HspVector { d: 15.5, p: 0.4, h: 1.0 },
    "Triethylene Glycol" => HspVector { d: 16.0, p: 12.5, h: 18.6 },
    "Triethylene Glycol Monooleyl Ether" => HspVector { d: 16.0, p: 3.1, h: 8.4 },
    "Triethylphosphate" => HspVector { d: 16.7, p: 11.4, h: 9.2 },
    "Trifluoroacetic Acid" => HspVector { d: 15.6, p: 9.7, h: 11.4 },
    "Texanol" => HspVector { d: 15.1, p: 6.1, h: 9.8 },
    "Trimethylbezene" => HspVector { d: 18.0, p: 1.0, h: 1.0 },
    "2,2,4-Trimethylpentane" => HspVector { d: 14.1, p: 0.0, h: 0.0 },
    "Trimethylphosphate" => HspVector { d: 15.7, p: 10.5, h: 10.2 },
    "p-Xylene" => HspVector { d: 17.8, p: 1.0, h: 3.1 },
    "Acetic acid ethyl ester" => HspVector { d: 15.8, p: 5.3, h: 7.2 },
    "Trichloro-methane" => HspVector { d: 17.8, p: 3.1, h: 5.7 },
};

/// Built-in solute reference table: polyphenols, triglycerides, and common
/// 3D-printing/packaging polymers, each with its interaction radius Ro.
pub static SOLUTES: Map<&'static str, SoluteRecord> = phf_map! {
    "Piceatannol" => SoluteRecord { hsp: HspVector { d: 22.7, p: 7.11, h: 26.36 }, ro: 20.43 },
    "Resveratrol" => SoluteRecord { hsp: HspVector { d: 23.1, p: 6.1, h: 20.5 }, ro: 16.09 },
    "Curcumin" => SoluteRecord { hsp: HspVector { d: 18.2, p: 8.6, h: 11.5 }, ro: 5.5 },
    "Quercetin" => SoluteRecord { hsp: HspVector { d: 21.3, p: 9.4, h: 14.2 }, ro: 4.8 },
    "Genistein" => SoluteRecord { hsp: HspVector { d: 19.0, p: 8.0, h: 11.8 }, ro: 5.1 },
    "Luteolin" => SoluteRecord { hsp: HspVector { d: 20.0, p: 9.2, h: 12.7 }, ro: 5.0 },
    "Pterostilbene" => SoluteRecord { hsp: HspVector { d: 19.2, p: 6.9, h: 9.8 }, ro: 5.3 },
    "Apigenin" => SoluteRecord { hsp: HspVector { d: 19.6, p: 7.2, h: 12.1 }, ro: 5.2 },
    "Baicalein" => SoluteRecord { hsp: HspVector { d: 18.7, p: 8.0, h: 10.5 }, ro: 5.3 },
    "Catechin" => SoluteRecord { hsp: HspVector { d: 21.0, p: 9.1, h: 14.5 }, ro: 5.0 },
    "Epicatechin" => SoluteRecord { hsp: HspVector { d: 20.8, p: 8.9, h: 13.9 }, ro: 5.0 },
    "Hesperetin" => SoluteRecord { hsp: HspVector { d: 19.2, p: 7.6, h: 10.7 }, ro: 5.1 },
    "Kaempferol" => SoluteRecord { hsp: HspVector { d: 20.2, p: 9.0, h: 13.2 }, ro: 5.0 },
    "Myricetin" => SoluteRecord { hsp: HspVector { d: 21.4, p: 9.7, h: 15.0 }, ro: 4.9 },
    "Naringenin" => SoluteRecord { hsp: HspVector { d: 19.0, p: 7.5, h: 11.0 }, ro: 5.2 },
    "Rutin" => SoluteRecord { hsp: HspVector { d: 21.6, p: 9.8, h: 16.3 }, ro: 4.8 },
    "Taxifolin" => SoluteRecord { hsp: HspVector { d: 20.7, p: 8.8, h: 13.7 }, ro: 5.0 },
    "Triolein" => SoluteRecord { hsp: HspVector { d: 16.4, p: 3.1, h: 4.9 }, ro: 6.2 },
    "Polystyrene" => SoluteRecord { hsp: HspVector { d: 18.6, p: 4.5, h: 2.9 }, ro: 10.6 },
    "Polyethylene" => SoluteRecord { hsp: HspVector { d: 18.0, p: 0.0, h: 2.0 }, ro: 9.8 },
    "PVC" => SoluteRecord { hsp: HspVector { d: 18.2, p: 7.5, h: 8.3 }, ro: 8.1 },
    "PMMA" => SoluteRecord { hsp: HspVector { d: 18.6, p: 10.5, h: 7.5 }, ro: 8.6 },
    "Nylon-6,6" => SoluteRecord { hsp: HspVector { d: 18.6, p: 5.6, h: 12.8 }, ro: 6.7 },
    "PLA" => SoluteRecord { hsp: HspVector { d: 18.6, p: 9.9, h: 6.0 }, ro: 8.4 },
    "ABS" => SoluteRecord { hsp: HspVector { d: 17.6, p: 8.6, h: 4.7 }, ro: 9.2 },
    "PETG" => SoluteRecord { hsp: HspVector { d: 18.2, p: 6.4, h: 6.6 }, ro: 8.8 },
    "TPU" => SoluteRecord { hsp: HspVector { d: 17.5, p: 9.3, h: 8.5 }, ro: 8.0 },
    "Nylon (PA12)" => SoluteRecord { hsp: HspVector { d: 17.0, p: 3.7, h: 6.4 }, ro: 8.2 },
    "PEEK" => SoluteRecord { hsp: HspVector { d: 19.5, p: 5.2, h: 5.2 }, ro: 10.8 },
    "PVA" => SoluteRecord { hsp: HspVector { d: 15.6, p: 18.8, h: 16.9 }, ro: 7.0 },
    "HIPS" => SoluteRecord { hsp: HspVector { d: 18.0, p: 4.3, h: 2.7 }, ro: 10.4 },
    "ASA" => SoluteRecord { hsp: HspVector { d: 18.1, p: 9.5, h: 5.0 }, ro: 9.0 },
    "PC (Polycarbonate)" => SoluteRecord { hsp: HspVector { d: 19.1, p: 7.5, h: 6.0 }, ro: 9.5 },
    "Pullan" => SoluteRecord { hsp: HspVector { d: 18.7, p: 18.1, h: 23.5 }, ro: 47.7 },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solvent_table_contains_canonical_entries() {
        let water = SOLVENTS.get("Water").unwrap();
        assert_eq!(water.d, 15.5);
        assert_eq!(water.p, 16.0);
        assert_eq!(water.h, 42.3);

        assert!(SOLVENTS.get("γ-Butyrolactone (GBL)").is_some());
        assert!(SOLVENTS.get("Acetic acid ethyl ester").is_some());
    }

    #[test]
    fn solute_table_entries_carry_positive_radii() {
        assert!(SOLUTES.len() >= 30);
        for (name, record) in SOLUTES.entries() {
            assert!(record.ro > 0.0, "solute {name} has non-positive Ro");
        }
    }
}

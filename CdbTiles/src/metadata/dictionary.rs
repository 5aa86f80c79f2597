//! CDB attribute code dictionary.
//!
//! Human-readable names and descriptions of the point-feature attributes
//! that reach the feature metadata schema.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Name and description of a CDB attribute code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const ENTRIES: [(&str, &str, &str); 18] = [
    (
        "AO1",
        "Angle of Orientation",
        "The angular distance measured from true north (0 deg) clockwise to the major (Y) axis of the feature. If the feature is square, the axis 0 through 89.999 deg shall be recorded. If the feature is circular, 360.000 deg shall be recorded. Recommended Usage. CDB readers should default to a value of 0.000 if AO1 is missing. Applicable to Point, Light Point, Moving Model Location and Figure Point features. When used in conjunction with the PowerLine dataset, AO1 corresponds to the orientation of the Y-axis of the modeled pylon. The modeled pylon should be oriented (in its local Cartesian space) so that the wires nominally attach along the Y-axis.",
    ),
    (
        "BBH",
        "Bounding Box Height",
        "The Height/Width/Length of the Bounding Box of the 3D model associated with a point feature. It is the dimension of the box centered at the model origin and that bounds the portion of the model above its XY plane, including the envelopes of all articulated parts. BBH refers to height of the box above the XY plane of the model, BBW refers to the width of the box along the X-axis, and BBL refers to the length of the box along the Y-axis. Note that for 3D models used as cultural features, the XY plane of the model corresponds to its ground reference plane. The value of BBH, BBW and BBL should be accounted for by client-devices (in combination with other information) to determine the appropriate distance at which the model should be paged-in, rendered or processed. BBH, BBW and BBL are usually generated through database authoring tool automation. Optional on features for which a MODL has been assigned. When missing, CDB readers should default BBH to the value of BSR, and BBW and BBL to twice the value of BSR. The dimension of the bounding box is intrinsic to the model and identical for all LOD representations.",
    ),
    ("BBL", "Bounding Box Length", "The length of a feature."),
    ("BBW", "Bounding Box Width", "The width of a feature."),
    (
        "BSR",
        "Bounding Sphere Radius",
        "The radius of a feature. In the case where a feature references an associated 3D model, it is the radius of the hemisphere centered at the model origin and that bounds the portion of the model above its XY plane, including the envelopes of all articulated parts. Note that for 3D models used as cultural features, the XY plane of the model corresponds to its ground reference plane. The value of BSR should be accounted for by client-devices (in combination with other information) to determine the appropriate distance at which the model should be paged-in, rendered or processed. When the feature does not reference a 3D model, BSR is the radius of the abstract point representing the feature (e.g., a city). ",
    ),
    (
        "CMIX",
        "Composite Material Index",
        "Index into the Composite Material Table is used to determine the Base Materials composition of the associated feature.",
    ),
    (
        "FSC",
        "Feature Classification Code",
        "This code, in conjunction with the FACC is used to distinguish and categorize features within a dataset.",
    ),
    (
        "HGT",
        "Height above surface level",
        "Distance measured from the lowest point of the base at ground (non-floating objects) or water level (floating objects downhill side/downstream side) to the tallest point of the feature above the surface. Recorded values are positive numbers. In the case of roads and railroads, HGT corresponds to the elevation of the road/railroad wrt terrain in its immediate vicinity.",
    ),
    (
        "MLOD",
        "Model Level Of Detail",
        "The level of detail of the 3D model associated with the point feature. When used in conjunction with MODL, the MLOD attribute indicates the LOD where the corresponding MODL is found. In this case, the value of MLOD can never be larger than the LOD of the Vector Tile-LOD that contains it. When used in the context of Airport and Environmental Light Point features, the value of MLOD, if present, indicates that this light point also exist in a 3D model found at the specified LOD. In such case, the value of MLOD is not constrained and can indicate any LOD.",
    ),
    (
        "NIS",
        "Number of Instances",
        "Number of instances found in the 3D model associated with the cultural point feature.",
    ),
    (
        "NIX",
        "Number of Indices",
        "Number of indices found in the 3D model associated with the cultural point feature.",
    ),
    (
        "NNL",
        "Number of Normals",
        "Number of normal vectors found in the 3D model associated with the cultural point feature.",
    ),
    (
        "NTC",
        "Number of Texture Coordinates",
        "Number of texture coordinates found in the 3D model associated with the cultural point feature.",
    ),
    (
        "NTX",
        "Number of Texels",
        "Number of texels found in the 3D model associated with the cultural point feature.",
    ),
    (
        "NVT",
        "Number of Vertices",
        "Number of vertices of the 3D model associated with a point feature.",
    ),
    (
        "RTAI",
        "Relative Tactical Importance",
        "Provides the Relative TActical Importance of moving models or cultural features relative to other features for the purpose of client-device scene/load management. A value of 100% corresponds to the highest importance; a value of 0% corresponds to the lowest importance. When confronted with otherwise identical objects that differ only wrt to their RelativeTActical Importance, client-devices should always discard features with lower importance before those of higher importance in the course of performing their scene / load management function. As a result, a value of zero gives complete freedom to client-devices to discard the feature as soon as the load of the client-device is exceeded. The effectiveness of scene / load management functions can be severely hampered if large quantities of features are assigned the same Relative TActical Importance by the modeler. In effect, if all models are assigned the same value, the client-devices have no means to distinguish tactically important objects from each other. Assigning a value of 1% to all objects is equivalent to assigning them all a value of 99%. Ideally, the assignment of tactical importance to features should be in accordance to a histogram similar to the one shown here. The shape of the curve is not critical, however the proportion of models tagged with a high importance compared to those with low importance is critical in achieving effective scene/load management schemes. It is illustrated here to show that few models should have an importance of 100 with progressively more models with lower importance. The assignment of the RTAI to each feature lends itself to database tools automation. For instance, RTAI could be based on a look-up function which factors the feature\u{2019}s type (FACC or MMDC). The value of Relative TActical Importance should be accounted for by client-devices (in combination with other information) to determine the appropriate distance at which the model should be rendered or processed. Relative TActical Importance is mandatory. It has no default value.",
    ),
    (
        "SSC",
        "Structure Shape Category",
        "Describes the Geometric form, appearance, or configuration of the feature.",
    ),
    ("SSR", "Structure Shape of Roof", "Describes the roof shape."),
];

/// The dictionary, built on first use.
pub fn attribute_dictionary() -> &'static HashMap<&'static str, AttributeInfo> {
    static DICTIONARY: OnceLock<HashMap<&'static str, AttributeInfo>> = OnceLock::new();
    DICTIONARY.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|&(code, name, description)| (code, AttributeInfo { name, description }))
            .collect()
    })
}

/// Look up an attribute code; unknown codes get an empty name and description.
pub fn describe_attribute(code: &str) -> AttributeInfo {
    attribute_dictionary()
        .get(code)
        .copied()
        .unwrap_or(AttributeInfo {
            name: "",
            description: "",
        })
}

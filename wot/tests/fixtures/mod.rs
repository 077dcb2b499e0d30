//! Expanded Thing Description fixtures.
//!
//! Each constant holds the JSON-LD expansion of a Thing Description written
//! against the WoT TD 1.0 context, as a standards-compliant processor emits it.

#![allow(dead_code)]

/// Namespace of the iotschema.org vocabulary used by the fixtures.
pub const IOT: &str = "http://iotschema.org/";

/// Builds an iotschema.org IRI.
pub fn iot(local: &str) -> String {
    format!("{IOT}{local}")
}

/// Target of the `lamp-on` property form.
pub const LAMP_ON_HREF: &str =
    "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/properties/on";

/// Target of the `lamp-setOn` action form.
pub const LAMP_SET_ON_HREF: &str =
    "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/actions/setOn";

/// Identifier of [`LIGHT_ONE`].
pub const LIGHT_ONE_ID: &str = "uri:urn:ed2f1fb3-cbf8-479e-99bb-ef9968e5eed6";

/// A colour lamp with switch and colour properties and actions.
pub const LIGHT_ONE: &str = r#"[
  {
    "@id": "uri:urn:ed2f1fb3-cbf8-479e-99bb-ef9968e5eed6",
    "@type": [
      "https://www.w3.org/2019/wot/td#Thing",
      "http://iotschema.org/ColourControl",
      "http://iotschema.org/DimmerControl",
      "http://iotschema.org/BinarySwitchControl"
    ],
    "http://purl.org/dc/terms/description": [{ "@value": "Generated TD from thing" }],
    "http://purl.org/dc/terms/title": [{ "@value": "LightOne" }],
    "http://schema.org/manufacturer": [{ "@value": "LIFX" }],
    "https://www.w3.org/2019/wot/td#name": [{ "@value": "LightOne" }],
    "https://www.w3.org/2019/wot/td#hasSecurityConfiguration": [
      { "@id": "bearerSecurityScheme" }
    ],
    "https://www.w3.org/2019/wot/td#hasActionAffordance": [
      {
        "@index": "lamp-setOn",
        "@type": [
          "https://www.w3.org/2019/wot/td#ActionAffordance",
          "http://iotschema.org/TurnOn",
          "http://iotschema.org/TurnOff"
        ],
        "http://purl.org/dc/terms/title": [{ "@value": "setOn" }],
        "https://www.w3.org/2019/wot/td#isSafe": [{ "@value": false }],
        "https://www.w3.org/2019/wot/td#isIdempotent": [{ "@value": true }],
        "https://www.w3.org/2019/wot/td#hasForm": [
          {
            "https://www.w3.org/2019/wot/hypermedia#forContentType": [{ "@value": "application/json" }],
            "https://www.w3.org/2019/wot/hypermedia#hasOperationType": [
              { "@id": "https://www.w3.org/2019/wot/td#invokeAction" }
            ],
            "https://www.w3.org/2019/wot/hypermedia#hasTarget": [
              { "@id": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/actions/setOn" }
            ]
          }
        ],
        "https://www.w3.org/2019/wot/td#hasInputSchema": [
          {
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
              { "@id": "https://www.w3.org/2019/wot/json-schema#ObjectSchema" }
            ],
            "https://www.w3.org/2019/wot/json-schema#properties": [
              {
                "@index": "on",
                "@type": ["http://iotschema.org/StatusData", "http://iotschema.org/StateData"],
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
                  { "@id": "https://www.w3.org/2019/wot/json-schema#BooleanSchema" }
                ]
              }
            ]
          }
        ]
      },
      {
        "@index": "lamp-setColor",
        "@type": [
          "https://www.w3.org/2019/wot/td#ActionAffordance",
          "http://iotschema.org/SetColour"
        ],
        "http://purl.org/dc/terms/title": [{ "@value": "setColor" }],
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
          { "@id": "https://www.w3.org/2019/wot/json-schema#ObjectSchema" }
        ],
        "https://www.w3.org/2019/wot/td#isSafe": [{ "@value": true }],
        "https://www.w3.org/2019/wot/td#isIdempotent": [{ "@value": true }],
        "https://www.w3.org/2019/wot/td#hasForm": [
          {
            "https://www.w3.org/2019/wot/hypermedia#forContentType": [{ "@value": "application/json" }],
            "https://www.w3.org/2019/wot/hypermedia#hasOperationType": [
              { "@id": "https://www.w3.org/2019/wot/td#invokeAction" }
            ],
            "https://www.w3.org/2019/wot/hypermedia#hasTarget": [
              { "@id": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/actions/setColor" }
            ]
          }
        ],
        "https://www.w3.org/2019/wot/td#hasInputSchema": [
          {
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
              { "@id": "https://www.w3.org/2019/wot/json-schema#ObjectSchema" }
            ],
            "https://www.w3.org/2019/wot/json-schema#properties": [
              {
                "@index": "red",
                "@type": ["http://iotschema.org/RColourData"],
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
                  { "@id": "https://www.w3.org/2019/wot/json-schema#IntegerSchema" }
                ]
              },
              {
                "@index": "blue",
                "@type": ["http://iotschema.org/BColourData"],
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
                  { "@id": "https://www.w3.org/2019/wot/json-schema#IntegerSchema" }
                ]
              },
              {
                "@index": "green",
                "@type": ["http://iotschema.org/GColourData"],
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
                  { "@id": "https://www.w3.org/2019/wot/json-schema#IntegerSchema" }
                ]
              }
            ]
          }
        ]
      }
    ],
    "https://www.w3.org/2019/wot/td#hasPropertyAffordance": [
      {
        "@index": "lamp-on",
        "@type": [
          "https://www.w3.org/2019/wot/td#PropertyAffordance",
          "http://iotschema.org/SwitchStatus"
        ],
        "http://purl.org/dc/terms/title": [{ "@value": "on" }],
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
          { "@id": "https://www.w3.org/2019/wot/json-schema#ObjectSchema" }
        ],
        "https://www.w3.org/2019/wot/td#isObservable": [{ "@value": false }],
        "https://www.w3.org/2019/wot/td#hasForm": [
          {
            "https://www.w3.org/2019/wot/hypermedia#forContentType": [{ "@value": "application/json" }],
            "https://www.w3.org/2019/wot/hypermedia#hasOperationType": [
              { "@id": "https://www.w3.org/2019/wot/td#readProperty" }
            ],
            "https://www.w3.org/2019/wot/hypermedia#hasTarget": [
              { "@id": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/properties/on" }
            ]
          }
        ],
        "https://www.w3.org/2019/wot/json-schema#properties": [
          {
            "@id": "dateModified",
            "@index": "time",
            "@type": ["http://schema.org/DateTime"],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
              { "@id": "https://www.w3.org/2019/wot/json-schema#StringSchema" }
            ]
          },
          {
            "@index": "value",
            "@type": ["http://iotschema.org/StatusData"],
            "http://schema.org/dateModified": [{ "@id": "dateModified" }],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
              { "@id": "https://www.w3.org/2019/wot/json-schema#BooleanSchema" }
            ]
          }
        ]
      },
      {
        "@index": "lamp-color",
        "@type": [
          "https://www.w3.org/2019/wot/td#PropertyAffordance",
          "http://iotschema.org/CurrentColour"
        ],
        "http://purl.org/dc/terms/title": [{ "@value": "color" }],
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
          { "@id": "https://www.w3.org/2019/wot/json-schema#ObjectSchema" }
        ],
        "https://www.w3.org/2019/wot/td#isObservable": [{ "@value": false }],
        "https://www.w3.org/2019/wot/td#hasForm": [
          {
            "https://www.w3.org/2019/wot/hypermedia#forContentType": [{ "@value": "application/json" }],
            "https://www.w3.org/2019/wot/hypermedia#hasOperationType": [
              { "@id": "https://www.w3.org/2019/wot/td#readProperty" }
            ],
            "https://www.w3.org/2019/wot/hypermedia#hasTarget": [
              { "@id": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/properties/color" }
            ]
          }
        ],
        "https://www.w3.org/2019/wot/json-schema#properties": [
          {
            "@index": "red",
            "@type": ["http://iotschema.org/RColourData"],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
              { "@id": "https://www.w3.org/2019/wot/json-schema#IntegerSchema" }
            ]
          },
          {
            "@index": "green",
            "@type": ["http://iotschema.org/GColourData"],
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
              { "@id": "https://www.w3.org/2019/wot/json-schema#IntegerSchema" }
            ]
          }
        ]
      }
    ]
  }
]"#;

/// A plain on/off switch without observable flags.
pub const WALL_SWITCH: &str = r#"[
  {
    "@id": "urn:dev:wall-switch-7",
    "@type": [
      "https://www.w3.org/2019/wot/td#Thing",
      "http://iotschema.org/BinarySwitchControl"
    ],
    "https://www.w3.org/2019/wot/td#name": [{ "@value": "WallSwitch" }],
    "https://www.w3.org/2019/wot/td#hasPropertyAffordance": [
      {
        "@index": "switch-on",
        "@type": [
          "https://www.w3.org/2019/wot/td#PropertyAffordance",
          "http://iotschema.org/SwitchStatus"
        ],
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#type": [
          { "@id": "https://www.w3.org/2019/wot/json-schema#BooleanSchema" }
        ],
        "https://www.w3.org/2019/wot/td#hasForm": [
          {
            "https://www.w3.org/2019/wot/hypermedia#hasTarget": [
              { "@id": "https://switch.example.com/properties/on" }
            ]
          }
        ]
      }
    ],
    "https://www.w3.org/2019/wot/td#hasActionAffordance": [
      {
        "@index": "switch-toggle",
        "@type": [
          "https://www.w3.org/2019/wot/td#ActionAffordance",
          "http://iotschema.org/TurnOn",
          "http://iotschema.org/TurnOff"
        ],
        "https://www.w3.org/2019/wot/td#hasForm": [
          {
            "https://www.w3.org/2019/wot/hypermedia#hasTarget": [
              { "@id": "https://switch.example.com/actions/toggle" }
            ]
          }
        ]
      }
    ]
  }
]"#;

/// [`LIGHT_ONE`] in compact form, written against the TD 1.0 context.
pub const LIGHT_ONE_COMPACT: &str = r#"{
  "@context": [
    "https://www.w3.org/2019/wot/td/v1",
    {
      "iot": "http://iotschema.org/",
      "schema": "http://schema.org/"
    }
  ],
  "id": "uri:urn:ed2f1fb3-cbf8-479e-99bb-ef9968e5eed6",
  "@type": ["Thing", "iot:ColourControl", "iot:DimmerControl", "iot:BinarySwitchControl"],
  "name": "LightOne",
  "title": "LightOne",
  "description": "Generated TD from thing",
  "schema:manufacturer": "LIFX",
  "security": ["bearerSecurityScheme"],
  "securityDefinitions": {
    "bearerSecurityScheme": { "scheme": "bearer", "in": "header" }
  },
  "actions": {
    "lamp-setOn": {
      "@type": ["ActionAffordance", "iot:TurnOn", "iot:TurnOff"],
      "title": "setOn",
      "safe": false,
      "idempotent": true,
      "input": {
        "type": "object",
        "properties": {
          "on": { "@type": ["iot:StatusData", "iot:StateData"], "type": "boolean" }
        }
      },
      "forms": [
        {
          "href": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/actions/setOn",
          "contentType": "application/json",
          "op": "invokeaction"
        }
      ]
    },
    "lamp-setColor": {
      "@type": ["ActionAffordance", "iot:SetColour"],
      "title": "setColor",
      "safe": true,
      "idempotent": true,
      "input": {
        "type": "object",
        "properties": {
          "red": { "@type": "iot:RColourData", "type": "integer" },
          "blue": { "@type": "iot:BColourData", "type": "integer" },
          "green": { "@type": "iot:GColourData", "type": "integer" }
        }
      },
      "forms": [
        {
          "href": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/actions/setColor",
          "contentType": "application/json",
          "op": "invokeaction"
        }
      ]
    }
  },
  "properties": {
    "lamp-on": {
      "@type": ["PropertyAffordance", "iot:SwitchStatus"],
      "title": "on",
      "type": "object",
      "observable": false,
      "properties": {
        "time": { "@id": "dateModified", "@type": "schema:DateTime", "type": "string" },
        "value": {
          "@type": "iot:StatusData",
          "schema:dateModified": { "@id": "dateModified" },
          "type": "boolean"
        }
      },
      "forms": [
        {
          "href": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/properties/on",
          "contentType": "application/json",
          "op": "readproperty"
        }
      ]
    },
    "lamp-color": {
      "@type": ["PropertyAffordance", "iot:CurrentColour"],
      "title": "color",
      "type": "object",
      "observable": false,
      "properties": {
        "red": { "@type": "iot:RColourData", "type": "integer" },
        "green": { "@type": "iot:GColourData", "type": "integer" }
      },
      "forms": [
        {
          "href": "https://api.connctd.io/api/betav1/wot/things/ad4bb62b-4e95-4628-9d8b-3cd412ec140f/components/lamp/properties/color",
          "contentType": "application/json",
          "op": "readproperty"
        }
      ]
    }
  }
}"#;

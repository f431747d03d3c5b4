//! EMF to temperature tables
//!
//! NIST ITS-90 inverse functions, input in millivolts with the reference
//! junction at 0 °C. Output is °C unless the segment says otherwise.
//!
//! Source: NIST Monograph 175 (1993), retrieved from the NIST ITS-90
//! thermocouple database.

#![allow(clippy::excessive_precision)]

use crate::segment::Bound::{Exclusive, Inclusive, Unbounded};
use crate::segment::{Segment, SegmentTable};

/// Type B, -0.002585 to 13.820 mV.
///
/// The first three segments are vendor curve fits of the NIST table that
/// yield °F (72-120, 120-200 and 200-482 °F). The NIST inverse functions take
/// over from 250 °C.
pub(crate) static TYPE_B: SegmentTable = SegmentTable {
    min: -0.002585,
    max: 13.820,
    segments: &[
        Segment::new(Unbounded, Inclusive(0.00191344), &[
            1.081395E+02,
            6.970012E+03,
            -2.065585E+06,
            6.670762E+08,
            8.525493E+11,
            -1.135224E+14,
            -1.477129E+17,
        ]).in_fahrenheit(),
        Segment::new(Exclusive(0.00191344), Inclusive(0.0274527), &[
            1.083872E+02,
            6.703680E+03,
            -3.659377E+05,
            2.219400E+07,
            -8.965692E+08,
            2.016542E+10,
            -1.892776E+11,
        ]).in_fahrenheit(),
        Segment::new(Exclusive(0.0274527), Exclusive(0.291), &[
            1.306166E+02,
            3.043443E+03,
            -2.203554E+04,
            1.432234E+05,
            -5.762741E+05,
            1.254962E+06,
            -1.126887E+06,
        ]).in_fahrenheit(),
        Segment::new(Inclusive(0.291), Inclusive(2.431), &[
            9.8423321e+1,
            6.9971500e+2,
            -8.4765304e+2,
            1.0052644e+3,
            -8.3345952e+2,
            4.5508542e+2,
            -1.5523037e+2,
            2.9886750e+1,
            -2.4742860,
        ]),
        Segment::new(Exclusive(2.431), Inclusive(13.820), &[
            2.1315071e+2,
            2.8510504e+2,
            -5.2742887e+1,
            9.9160804e+0,
            -1.2965303e+0,
            1.1195870e-1,
            -6.0625199e-3,
            1.8661696e-4,
            -2.4878585e-6,
        ]),
    ],
};

/// Type E, -8.825 to 76.373 mV (-200 to 1000 °C).
pub(crate) static TYPE_E: SegmentTable = SegmentTable {
    min: -8.825,
    max: 76.373,
    segments: &[
        Segment::new(Inclusive(-8.825), Inclusive(0.0), &[
            0.0000000E+00,
            1.6977288E+01,
            -4.3514970E-01,
            -1.5859697E-01,
            -9.2502871E-02,
            -2.6084314E-02,
            -4.1360199E-03,
            -3.4034030E-04,
            -1.1564890E-05,
        ]),
        Segment::new(Exclusive(0.0), Inclusive(76.373), &[
            0.000000E+00,
            1.7057035E+01,
            -2.3301759E-01,
            6.5435585E-03,
            -7.3562749E-05,
            -1.7896001E-06,
            8.4036165E-08,
            -1.3735879E-09,
            1.0629823E-11,
            -3.2447087E-14,
        ]),
    ],
};

/// Type J, -8.09538 to 69.55318 mV (-210 to 1200 °C).
pub(crate) static TYPE_J: SegmentTable = SegmentTable {
    min: -8.09538,
    max: 69.55318,
    segments: &[
        Segment::new(Inclusive(-8.09538), Inclusive(0.0), &[
            0.0000000E+00,
            1.9528268E+01,
            -1.2286185E+00,
            -1.0752178E+00,
            -5.9086933E-01,
            -1.7256713E-01,
            -2.8131513E-02,
            -2.3963370E-03,
            -8.3823321E-05,
        ]),
        Segment::new(Exclusive(0.0), Inclusive(42.919), &[
            0.000000E+00,
            1.978425E+01,
            -2.001204E-01,
            1.036969E-02,
            -2.549687E-04,
            3.585153E-06,
            -5.344285E-08,
            5.099890E-10,
        ]),
        Segment::new(Exclusive(42.919), Inclusive(69.55318), &[
            -3.11358187E+03,
            3.00543684E+02,
            -9.94773230E+00,
            1.70276630E-01,
            -1.43033468E-03,
            4.73886084E-06,
        ]),
    ],
};

/// Type K, -5.891 to 54.886 mV (-200 to 1372 °C).
pub(crate) static TYPE_K: SegmentTable = SegmentTable {
    min: -5.891,
    max: 54.886,
    segments: &[
        Segment::new(Inclusive(-5.891), Inclusive(0.0), &[
            0.0000000E+00,
            2.5173462E+01,
            -1.1662878E+00,
            -1.0833638E+00,
            -8.9773540E-01,
            -3.7342377E-01,
            -8.6632643E-02,
            -1.0450598E-02,
            -5.1920577E-04,
        ]),
        Segment::new(Exclusive(0.0), Inclusive(20.644), &[
            0.000000E+00,
            2.508355E+01,
            7.860106E-02,
            -2.503131E-01,
            8.315270E-02,
            -1.228034E-02,
            9.804036E-04,
            -4.413030E-05,
            1.057734E-06,
            -1.052755E-08,
        ]),
        Segment::new(Exclusive(20.644), Inclusive(54.886), &[
            -1.318058E+02,
            4.830222E+01,
            -1.646031E+00,
            5.464731E-02,
            -9.650715E-04,
            8.802193E-06,
            -3.110810E-08,
        ]),
    ],
};

/// Type N, -3.990 to 47.513 mV (-200 to 1300 °C).
pub(crate) static TYPE_N: SegmentTable = SegmentTable {
    min: -3.990,
    max: 47.513,
    segments: &[
        Segment::new(Inclusive(-3.990), Inclusive(0.0), &[
            0.0000000E+00,
            3.8436847E+01,
            1.1010485E+00,
            5.2229312E+00,
            7.2060525E+00,
            5.8488586E+00,
            2.7754916E+00,
            7.7075166E-01,
            1.1582665E-01,
            7.3138868E-03,
        ]),
        Segment::new(Exclusive(0.0), Inclusive(20.613), &[
            0.000000E+00,
            3.86896E+01,
            -1.08267E+00,
            4.70205E-02,
            -2.12169E-06,
            -1.17272E-04,
            5.39280E-06,
            -7.98156E-08,
        ]),
        Segment::new(Exclusive(20.613), Inclusive(47.513), &[
            1.972485E+01,
            3.300943E+01,
            -3.915159E-01,
            9.855391E-03,
            -1.274371E-04,
            7.767022E-07,
        ]),
    ],
};

/// Type R, -0.226 to 21.103 mV (-50 to 1768.1 °C).
pub(crate) static TYPE_R: SegmentTable = SegmentTable {
    min: -0.226,
    max: 21.103,
    segments: &[
        Segment::new(Inclusive(-0.226), Inclusive(1.923), &[
            0.0000000E+00,
            1.8891380E+02,
            -9.3835290E+01,
            1.3068619E+02,
            -2.2703580E+02,
            3.5145659E+02,
            -3.8953900E+02,
            2.8239471E+02,
            -1.2607281E+02,
            3.1353611E+01,
            -3.3187769E+00,
        ]),
        Segment::new(Exclusive(1.923), Inclusive(11.361), &[
            1.334584505E+01,
            1.472644573E+02,
            -1.844024844E+01,
            4.031129726E+00,
            -6.249428360E-01,
            6.468412046E-02,
            -4.458750426E-03,
            1.994710149E-04,
            -5.313401790E-06,
            6.481976217E-08,
        ]),
        Segment::new(Exclusive(11.361), Inclusive(19.739), &[
            -8.199599416E+01,
            1.553962042E+02,
            -8.342197663E+00,
            4.279433549E-01,
            -1.191577910E-02,
            1.492290091E-04,
        ]),
        Segment::new(Exclusive(19.739), Inclusive(21.103), &[
            3.406177836E+04,
            -7.023729171E+03,
            5.582903813E+02,
            -1.952394635E+01,
            2.560740231E-01,
        ]),
    ],
};

/// Type S, -0.235 to 18.693 mV (-50 to 1768.1 °C).
pub(crate) static TYPE_S: SegmentTable = SegmentTable {
    min: -0.235,
    max: 18.693,
    segments: &[
        Segment::new(Inclusive(-0.235), Inclusive(1.874), &[
            0.00000000E+00,
            1.84949460E+02,
            -8.00504062E+01,
            1.02237430E+02,
            -1.52248592E+02,
            1.88821343E+02,
            -1.59085941E+02,
            8.23027880E+01,
            -2.34181944E+01,
            2.79786260E+00,
        ]),
        Segment::new(Exclusive(1.874), Inclusive(10.332), &[
            1.291507177E+01,
            1.466298863E+02,
            -1.534713402E+01,
            3.145945973E+00,
            -4.163257839E-01,
            3.187963771E-02,
            -1.291637500E-03,
            2.183475087E-05,
            -1.447379511E-07,
            8.211272125E-09,
        ]),
        Segment::new(Exclusive(10.332), Inclusive(17.536), &[
            -8.087801117E+01,
            1.621573104E+02,
            -8.536869453E+00,
            4.719686976E-01,
            -1.441693666E-02,
            2.081618890E-04,
        ]),
        Segment::new(Exclusive(17.536), Inclusive(18.693), &[
            5.333875126E+04,
            -1.235892298E+04,
            1.092657613E+03,
            -4.265693686E+01,
            6.247205420E-01,
        ]),
    ],
};

/// Type T, -5.603 to 20.872 mV (-200 to 400 °C).
pub(crate) static TYPE_T: SegmentTable = SegmentTable {
    min: -5.603,
    max: 20.872,
    segments: &[
        Segment::new(Inclusive(-5.603), Inclusive(0.0), &[
            0.0000000E+00,
            2.5949192E+01,
            -2.1316967E-01,
            7.9018692E-01,
            4.2527777E-01,
            1.3304473E-01,
            2.0241446E-02,
            1.2668171E-03,
        ]),
        Segment::new(Exclusive(0.0), Inclusive(20.872), &[
            0.000000E+00,
            2.592800E+01,
            -7.602961E-01,
            4.637791E-02,
            -2.165394E-03,
            6.048144E-05,
            -7.293422E-07,
        ]),
    ],
};
